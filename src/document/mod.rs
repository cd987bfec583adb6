//! Text extraction from source documents, dispatched by file extension.

mod pdf;
mod text;

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),
}

/// Supported source document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Markdown,
    Pdf,
}

impl DocumentKind {
    /// Resolve a kind from a path's extension, case-insensitively.
    /// Unknown extensions map to `None`; the orchestrator skips those
    /// entries rather than treating them as errors.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "txt" | "text" => Some(Self::PlainText),
            "md" | "markdown" => Some(Self::Markdown),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// Extract the full text of a document from its raw bytes.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::PlainText | DocumentKind::Markdown => text::extract(bytes),
        DocumentKind::Pdf => pdf::extract(bytes),
    }
}
