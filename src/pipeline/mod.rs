//! Extraction and classification pipeline.
//!
//! Strictly sequential: one file at a time, dispatch by extension, extract,
//! classify, emit a record. Per-file failures become Error-typed records and
//! never abort the batch.

pub mod classify;
pub mod ocr;
pub mod pdf;
pub mod processor;

pub use classify::classify;
pub use ocr::OcrEngine;
pub use processor::process_batch;

use thiserror::Error;

/// Per-file recoverable extraction failures. The processor folds these into
/// Error records; nothing here is batch-fatal.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tesseract OCR initialization failed: {0}")]
    OcrInit(String),

    #[error("OCR processing failed: {0}")]
    OcrProcessing(String),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("Unsupported file type: {0}")]
    Unsupported(String),
}

/// Extraction strategy chosen for a file. The two paths are mutually
/// exclusive; there is no OCR fallback for PDFs without a text layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionKind {
    PdfText,
    Ocr,
}

/// Select the extraction strategy from the file name's extension,
/// case-insensitively.
pub fn extraction_kind(file_name: &str) -> Result<ExtractionKind, ExtractionError> {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => Ok(ExtractionKind::PdfText),
        "jpg" | "jpeg" | "png" => Ok(ExtractionKind::Ocr),
        _ => Err(ExtractionError::Unsupported(file_name.to_string())),
    }
}
