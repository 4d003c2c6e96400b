//! Document records as stored by the persistence collaborator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source format of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    /// Classify by MIME type; anything that is not PDF or Word is text
    pub fn from_mime_type(mime_type: &str) -> Self {
        let mime = mime_type.to_lowercase();
        if mime.contains("pdf") {
            DocumentKind::Pdf
        } else if mime.contains("word") {
            DocumentKind::Docx
        } else {
            DocumentKind::Txt
        }
    }
}

/// Validation lifecycle of a stored document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Processing,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: u64,
    pub file_name: String,
    pub upload_date: DateTime<Utc>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub status: DocumentStatus,
    pub compliance_score: u8,
}

/// Fields supplied when creating a record; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub file_name: String,
    pub mime_type: String,
    pub content: Option<String>,
}
