//! Turns request input into a single text string.

/// Upload metadata and format detection.
pub mod document;
/// PDF page text extraction.
pub mod pdf;
/// Lossy UTF-8 decoding for plain-text uploads.
pub mod plain;

pub use document::{DocumentKind, UploadedFile};
pub use pdf::extract_pdf_text;
pub use plain::decode_utf8_dropping_invalid;

use crate::error::{McqError, McqResult};

/// Raw request input: a text field, an uploaded file, or both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputPayload {
    /// Text typed into the form.
    pub text: Option<String>,
    /// Uploaded document.
    pub file: Option<UploadedFile>,
}

impl InputPayload {
    /// Payload carrying only raw text.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            file: None,
        }
    }

    /// Payload carrying only a file.
    #[must_use]
    pub fn from_file(file: UploadedFile) -> Self {
        Self {
            text: None,
            file: Some(file),
        }
    }
}

/// Produces the text to question.
///
/// A real upload always wins over the text field. An empty text field counts
/// as absent.
pub fn acquire_text(payload: InputPayload) -> McqResult<String> {
    if let Some(file) = payload.file.filter(|file| !file.is_placeholder()) {
        return match file.kind()? {
            DocumentKind::Pdf => extract_pdf_text(&file.bytes),
            DocumentKind::Txt => Ok(decode_utf8_dropping_invalid(&file.bytes)),
        };
    }
    match payload.text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(McqError::NoInputProvided),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_text_is_returned_unchanged() {
        let text = "Water boils at 100 degrees. Ice melts.";
        let first = acquire_text(InputPayload::from_text(text)).unwrap();
        let second = acquire_text(InputPayload::from_text(text)).unwrap();
        assert_eq!(first, text);
        assert_eq!(first, second);
    }

    #[test]
    fn file_overrides_text_field() {
        let payload = InputPayload {
            text: Some("ignored text".into()),
            file: Some(UploadedFile::new("notes.txt", "from the file".as_bytes())),
        };
        assert_eq!(acquire_text(payload).unwrap(), "from the file");
    }

    #[test]
    fn invalid_extension_is_rejected_even_with_text() {
        let payload = InputPayload {
            text: Some("some text".into()),
            file: Some(UploadedFile::new("report.docx", b"PK".to_vec())),
        };
        let err = acquire_text(payload).unwrap_err();
        assert!(matches!(err, McqError::InvalidFileType { ref filename } if filename == "report.docx"));
    }

    #[test]
    fn nothing_supplied() {
        assert!(matches!(
            acquire_text(InputPayload::default()),
            Err(McqError::NoInputProvided)
        ));
        assert!(matches!(
            acquire_text(InputPayload::from_text("")),
            Err(McqError::NoInputProvided)
        ));
    }

    #[test]
    fn placeholder_upload_falls_back_to_text() {
        let payload = InputPayload {
            text: Some("typed".into()),
            file: Some(UploadedFile::new("", Vec::new())),
        };
        assert_eq!(acquire_text(payload).unwrap(), "typed");
    }

    #[test]
    fn empty_txt_upload_yields_empty_text() {
        let payload = InputPayload::from_file(UploadedFile::new("empty.txt", Vec::new()));
        assert_eq!(acquire_text(payload).unwrap(), "");
    }
}
