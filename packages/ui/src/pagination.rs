//! Page index, page size, sort and search for a paginated list view.

use model::{Page, PageRequest, SortDirection};

/// Page sizes offered by list views.
pub const PAGE_SIZES: [u32; 4] = [5, 10, 25, 50];

/// Local list state. Any change re-fetches the list.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    pub page: u32,
    pub size: u32,
    pub search: String,
    pub sort_by: String,
    pub sort_dir: SortDirection,
}

impl Default for ListQuery {
    fn default() -> Self {
        let request = PageRequest::default();
        Self {
            page: request.page,
            size: request.size,
            search: String::new(),
            sort_by: request.sort_by,
            sort_dir: request.sort_dir,
        }
    }
}

impl ListQuery {
    /// A new search term starts again from the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.search {
            self.search = search;
            self.page = 0;
        }
    }

    /// A new page size starts again from the first page.
    pub fn set_page_size(&mut self, size: u32) {
        if size != self.size && size > 0 {
            self.size = size;
            self.page = 0;
        }
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Move to the previous page when `page` was emptied by deletes and is
    /// not the first one. Returns whether the page changed.
    pub fn step_back_if_emptied<T>(&mut self, page: &Page<T>) -> bool {
        if !page.content.is_empty() || page.number == 0 {
            return false;
        }
        self.set_page(page.number - 1);
        true
    }

    /// Sort by `field`, flipping the direction when it is already the sort field.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_by == field {
            self.sort_dir = match self.sort_dir {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.sort_by = field.to_string();
            self.sort_dir = SortDirection::Asc;
        }
        self.page = 0;
    }

    pub fn to_request(&self) -> PageRequest {
        let request = PageRequest::new(self.page, self.size)
            .with_sort(self.sort_by.clone(), self.sort_dir);
        if self.search.trim().is_empty() {
            request
        } else {
            request.with_search(self.search.trim())
        }
    }
}

/// "Showing 11 to 20 of 42 results", or "No results".
pub fn page_summary<T>(page: &Page<T>) -> String {
    if page.content.is_empty() || page.total_elements == 0 {
        return "No results".to_string();
    }
    let first = u64::from(page.number) * u64::from(page.size) + 1;
    let last = first + page.content.len() as u64 - 1;
    format!(
        "Showing {} to {} of {} results",
        first, last, page.total_elements
    )
}
