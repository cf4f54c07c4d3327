//! Offset pagination shared by list endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::application::null_as_empty;

/// One page of results, in the backend's pagination envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Requested page size.
    pub size: u32,
    /// Zero-based page index.
    pub number: u32,
}

impl<T> Page<T> {
    pub fn empty(size: u32) -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            size,
            number: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query for a paginated list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_dir: SortDirection,
    pub search: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_by: "applicationDate".to_string(),
            sort_dir: SortDirection::Desc,
            search: None,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort_by: impl Into<String>, sort_dir: SortDirection) -> Self {
        self.sort_by = sort_by.into();
        self.sort_dir = sort_dir;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Query-string pairs in backend order. A blank search term is left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("sortDir", self.sort_dir.to_string()),
        ];
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let pairs = PageRequest::default().query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "0".to_string()),
                ("size", "10".to_string()),
                ("sortBy", "applicationDate".to_string()),
                ("sortDir", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_search_is_omitted() {
        let pairs = PageRequest::new(2, 25).with_search("   ").query_pairs();
        assert!(pairs.iter().all(|(k, _)| *k != "search"));

        let pairs = PageRequest::new(0, 10)
            .with_sort("companyName", SortDirection::Asc)
            .with_search("rust dev")
            .query_pairs();
        assert!(pairs.contains(&("search", "rust dev".to_string())));
        assert!(pairs.contains(&("sortDir", "asc".to_string())));
    }

    #[test]
    fn test_decode_page() {
        let json = r#"{"content": [1, 2], "totalElements": 12, "totalPages": 2, "size": 10, "number": 0}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2]);
        assert!(page.has_next());
        assert!(!page.has_previous());

        let json = r#"{"content": null, "totalElements": 0, "totalPages": 0, "size": 10, "number": 0}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert!(page.content.is_empty());
        assert!(!page.has_next());
    }

    #[test]
    fn test_decode_page_of_records() {
        let json = r#"{"content": null, "totalElements": 3, "totalPages": 1, "size": 10, "number": 0}"#;
        let page: Page<Tagged> = serde_json::from_str(json).unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 3);

        let json = r#"{"totalElements": 0, "totalPages": 0, "size": 5, "number": 0}"#;
        let page: Page<Tagged> = serde_json::from_str(json).unwrap();
        assert_eq!(page, Page::empty(5));

        let json = r#"{"content": [{"label": "a"}], "totalElements": 1, "totalPages": 1, "size": 5, "number": 0}"#;
        let page: Page<Tagged> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![Tagged { label: "a".to_string() }]);
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Tagged {
        label: String,
    }
}
