//! Text-layer extraction for digital PDFs.

use std::path::Path;

use super::ExtractionError;

/// Extract the embedded text layer of a PDF. Returns the concatenated text
/// of all pages; a scanned PDF with no text layer yields an empty or
/// near-empty string rather than an error.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;
    extract_text_from_bytes(&bytes)
}

pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc = lopdf::Document::load_mem(bytes)
        .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    if pages.is_empty() {
        return Ok(String::new());
    }

    doc.extract_text(&pages)
        .map_err(|e| ExtractionError::PdfParsing(e.to_string()))
}
