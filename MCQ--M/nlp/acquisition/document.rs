use serde::{Deserialize, Serialize};

use crate::error::{McqError, McqResult};

/// Supported upload formats, decided by filename suffix only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// `.pdf` document, text extracted page by page.
    Pdf,
    /// `.txt` document, decoded as lossy UTF-8.
    Txt,
}

impl DocumentKind {
    /// Classifies a filename with a case-sensitive suffix check.
    pub fn from_filename(filename: &str) -> McqResult<Self> {
        if filename.ends_with(".pdf") {
            Ok(Self::Pdf)
        } else if filename.ends_with(".txt") {
            Ok(Self::Txt)
        } else {
            Err(McqError::InvalidFileType {
                filename: filename.to_string(),
            })
        }
    }
}

/// File received from a client: name plus raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Client-supplied filename.
    pub filename: String,
    /// Raw bytes.
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Creates a new upload.
    #[must_use]
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// True for the empty part browsers send when no file was chosen.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.filename.is_empty() && self.bytes.is_empty()
    }

    /// Format of the upload.
    pub fn kind(&self) -> McqResult<DocumentKind> {
        DocumentKind::from_filename(&self.filename)
    }
}
