//! Batch orchestrator: dispatch → extract → classify, one file at a time.

use tracing::{info, warn};

use crate::config::OcrConfig;
use crate::intake::{BatchItem, StoredFile};
use crate::models::DocumentRecord;

use super::{classify, extraction_kind, pdf, ExtractionKind, OcrEngine};

/// Process a batch sequentially, producing exactly one record per item in
/// input order. Extraction failures become Error records and never abort
/// the rest of the batch.
pub fn process_batch(items: &[BatchItem], ocr_config: &OcrConfig) -> Vec<DocumentRecord> {
    // One OCR engine for the whole batch; initialized on the first image.
    let mut ocr = OcrEngine::new(ocr_config);

    let records: Vec<DocumentRecord> = items
        .iter()
        .map(|item| match item {
            BatchItem::Stored(file) => process_one(file, &mut ocr),
            BatchItem::SaveFailed { file_name, message } => {
                DocumentRecord::error(file_name, "", message)
            }
        })
        .collect();

    info!(
        total = records.len(),
        failed = records
            .iter()
            .filter(|r| r.document_type == crate::types::DocumentType::Error)
            .count(),
        "batch processed"
    );

    records
}

fn process_one(file: &StoredFile, ocr: &mut OcrEngine) -> DocumentRecord {
    let text = extraction_kind(&file.original_name).and_then(|kind| match kind {
        ExtractionKind::PdfText => pdf::extract_text(&file.path),
        ExtractionKind::Ocr => ocr.recognize_file(&file.path),
    });

    match text {
        Ok(text) => DocumentRecord {
            document_type: classify(&file.original_name, &text),
            file_name: file.original_name.clone(),
            extracted_text: text.trim().to_string(),
            source_path: file.path.display().to_string(),
        },
        Err(e) => {
            warn!(name = %file.original_name, "extraction failed: {e}");
            DocumentRecord::error(
                &file.original_name,
                file.path.display().to_string(),
                format!("Error processing document: {e}"),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::BatchStorage;
    use crate::pipeline::pdf::tests::make_test_pdf;
    use crate::types::DocumentType;
    use tempfile::TempDir;

    fn test_ocr_config() -> OcrConfig {
        OcrConfig {
            language: "eng".to_string(),
            tessdata_dir: None,
        }
    }

    #[test]
    fn test_batch_preserves_order_with_mid_batch_failure() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = BatchStorage::create(temp_dir.path()).unwrap();

        let good = storage
            .save("passport_notes.pdf", &make_test_pdf("Nationality and place of birth"))
            .unwrap();
        // Corrupt PDF in the middle of the batch.
        let corrupt = storage.save("broken.pdf", b"not a pdf at all").unwrap();
        let other = storage
            .save("statement.pdf", &make_test_pdf("monthly summary"))
            .unwrap();

        let items = vec![
            BatchItem::Stored(good),
            BatchItem::Stored(corrupt),
            BatchItem::Stored(other),
        ];
        let records = process_batch(&items, &test_ocr_config());

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].file_name, "passport_notes.pdf");
        assert_eq!(records[0].document_type, DocumentType::Passport);
        assert_eq!(records[1].file_name, "broken.pdf");
        assert_eq!(records[1].document_type, DocumentType::Error);
        assert!(records[1].extracted_text.contains("Error processing document"));
        assert_eq!(records[2].file_name, "statement.pdf");
        assert_eq!(records[2].document_type, DocumentType::Unknown);
    }

    #[test]
    fn test_unsupported_extension_yields_error_record() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = BatchStorage::create(temp_dir.path()).unwrap();
        let stored = storage.save("form.xyz", b"whatever").unwrap();

        let records = process_batch(&[BatchItem::Stored(stored)], &test_ocr_config());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].document_type, DocumentType::Error);
        assert!(records[0].extracted_text.contains("Unsupported file type"));
    }

    #[test]
    fn test_save_failed_item_becomes_error_record() {
        let items = vec![BatchItem::SaveFailed {
            file_name: "ghost.pdf".to_string(),
            message: "Failed to save file: disk full".to_string(),
        }];

        let records = process_batch(&items, &test_ocr_config());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].file_name, "ghost.pdf");
        assert_eq!(records[0].document_type, DocumentType::Error);
        assert_eq!(records[0].source_path, "");
    }

    #[test]
    fn test_empty_pdf_text_classifies_by_filename() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = BatchStorage::create(temp_dir.path()).unwrap();
        let stored = storage.save("citizenship_copy.pdf", &make_test_pdf(" ")).unwrap();

        let records = process_batch(&[BatchItem::Stored(stored)], &test_ocr_config());
        assert_eq!(records[0].document_type, DocumentType::Citizenship);
    }
}
