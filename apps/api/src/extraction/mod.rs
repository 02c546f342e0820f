//! Document → plain text. Only text ever reaches the scanner.
//!
//! Parsing is CPU-bound and the PDF parser can panic on malformed input, so it runs
//! inside `tokio::task::spawn_blocking`; a panic surfaces as `ExtractError::Aborted`.

pub mod docx;
pub mod pdf;

use std::path::Path;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported document format: '{0}' (expected .pdf, .docx or .txt)")]
    UnsupportedFormat(String),

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("Failed to read DOCX: {0}")]
    Docx(String),

    #[error("Document parsing aborted: {0}")]
    Aborted(String),
}

impl DocumentFormat {
    /// Detects the format from the uploaded file name's extension.
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" | "text" => Ok(DocumentFormat::PlainText),
            _ => Err(ExtractError::UnsupportedFormat(file_name.to_string())),
        }
    }
}

/// Extracts plain text from `bytes` on the blocking pool.
pub async fn extract_text(format: DocumentFormat, bytes: Bytes) -> Result<String, ExtractError> {
    let size = bytes.len();
    let text = tokio::task::spawn_blocking(move || extract_text_blocking(format, &bytes))
        .await
        .map_err(|e| ExtractError::Aborted(e.to_string()))??;

    debug!(?format, size, chars = text.len(), "Document text extracted");
    Ok(text)
}

pub fn extract_text_blocking(format: DocumentFormat, bytes: &[u8]) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Pdf => pdf::read_pdf(bytes),
        DocumentFormat::Docx => docx::read_docx(bytes),
        DocumentFormat::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_file_name("cv.pdf").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_file_name("CV.PDF").unwrap(), DocumentFormat::Pdf);
        assert_eq!(
            DocumentFormat::from_file_name("resume.final.docx").unwrap(),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_file_name("notes.txt").unwrap(),
            DocumentFormat::PlainText
        );
    }

    #[test]
    fn test_unsupported_formats_are_rejected() {
        for name in ["resume.doc", "resume.odt", "resume", ""] {
            assert!(matches!(
                DocumentFormat::from_file_name(name),
                Err(ExtractError::UnsupportedFormat(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_plain_text_passes_through() {
        let text = extract_text(DocumentFormat::PlainText, Bytes::from_static(b"Rust | Go"))
            .await
            .unwrap();
        assert_eq!(text, "Rust | Go");
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_an_error() {
        let result = extract_text(DocumentFormat::Pdf, Bytes::from_static(b"not a pdf")).await;
        assert!(matches!(
            result,
            Err(ExtractError::Pdf(_)) | Err(ExtractError::Aborted(_))
        ));
    }
}
