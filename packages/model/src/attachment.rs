//! Files attached to an application (resumes, cover letters, ...).
//!
//! The bytes live in blob storage; these records only carry the metadata and
//! the storage URL. Older payloads name the MIME type `fileType` and the URL
//! `url`, so both spellings are accepted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::activity::ApplicationRef;
use crate::Id;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttachmentType {
    Resume,
    CoverLetter,
    Portfolio,
    Transcript,
    Certification,
    WorkSamples,
    AssignmentSubmission,
    Other,
}

impl AttachmentType {
    pub fn wire_name(self) -> &'static str {
        match self {
            AttachmentType::Resume => "RESUME",
            AttachmentType::CoverLetter => "COVER_LETTER",
            AttachmentType::Portfolio => "PORTFOLIO",
            AttachmentType::Transcript => "TRANSCRIPT",
            AttachmentType::Certification => "CERTIFICATION",
            AttachmentType::WorkSamples => "WORK_SAMPLES",
            AttachmentType::AssignmentSubmission => "ASSIGNMENT_SUBMISSION",
            AttachmentType::Other => "OTHER",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttachmentType::Resume => "Resume",
            AttachmentType::CoverLetter => "Cover Letter",
            AttachmentType::Portfolio => "Portfolio",
            AttachmentType::Transcript => "Transcript",
            AttachmentType::Certification => "Certification",
            AttachmentType::WorkSamples => "Work Samples",
            AttachmentType::AssignmentSubmission => "Assignment Submission",
            AttachmentType::Other => "Other",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: Id,
    #[serde(default)]
    pub r#type: Option<AttachmentType>,
    pub file_name: String,
    #[serde(default)]
    pub original_file_name: Option<String>,
    /// MIME type.
    #[serde(default, alias = "fileType")]
    pub content_type: Option<String>,
    #[serde(default)]
    pub file_size_bytes: Option<u64>,
    #[serde(alias = "url")]
    pub blob_url: String,
    pub uploaded_at: NaiveDateTime,
    #[serde(default)]
    pub description: Option<String>,
}

impl Attachment {
    /// Size formatted for display ("12.3 KB"), if known.
    pub fn display_size(&self) -> Option<String> {
        let bytes = self.file_size_bytes?;
        Some(match bytes {
            b if b < 1024 => format!("{b} B"),
            b if b < 1024 * 1024 => format!("{:.1} KB", b as f64 / 1024.0),
            b => format!("{:.1} MB", b as f64 / (1024.0 * 1024.0)),
        })
    }
}

/// Metadata for an attachment whose bytes are already in blob storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentDraft {
    pub application: ApplicationRef,
    pub r#type: AttachmentType,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_bytes: Option<u64>,
    pub blob_url: String,
    pub uploaded_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_frontend_field_names() {
        let json = r#"{
            "id": 1,
            "fileName": "cv.pdf",
            "fileType": "application/pdf",
            "url": "https://blob/cv.pdf",
            "uploadedAt": "2024-02-01T08:00:00"
        }"#;
        let attachment: Attachment = serde_json::from_str(json).unwrap();
        assert_eq!(attachment.content_type.as_deref(), Some("application/pdf"));
        assert_eq!(attachment.blob_url, "https://blob/cv.pdf");
        assert!(attachment.r#type.is_none());
    }

    #[test]
    fn test_display_size() {
        let json = r#"{
            "id": 2,
            "type": "COVER_LETTER",
            "fileName": "letter.docx",
            "fileSizeBytes": 2048,
            "blobUrl": "https://blob/letter.docx",
            "uploadedAt": "2024-02-01T08:00:00"
        }"#;
        let attachment: Attachment = serde_json::from_str(json).unwrap();
        assert_eq!(attachment.r#type, Some(AttachmentType::CoverLetter));
        assert_eq!(attachment.display_size().as_deref(), Some("2.0 KB"));
    }
}
