use crate::extraction::ExtractError;

/// Concatenated text of every page, in page order. Pages without extractable text
/// contribute nothing.
pub fn read_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}
