//! OCR extraction for raster images.
//!
//! One engine per batch: the underlying Tesseract instance is created on
//! first use and reused for every image in the batch. A failed recognition
//! forfeits the instance; the next call re-initializes transparently.

use std::path::Path;

use tesseract::Tesseract;
use tracing::debug;

use crate::config::OcrConfig;

use super::ExtractionError;

pub struct OcrEngine {
    tess: Option<Tesseract>,
    language: String,
    tessdata_dir: Option<String>,
}

impl OcrEngine {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            tess: None,
            language: config.language.clone(),
            tessdata_dir: config.tessdata_dir.clone(),
        }
    }

    fn init(&self) -> Result<Tesseract, ExtractionError> {
        debug!(language = %self.language, "initializing OCR engine");
        Tesseract::new(self.tessdata_dir.as_deref(), Some(&self.language))
            .map_err(|e| ExtractionError::OcrInit(format!("{e:?}")))
    }

    /// Run recognition over an image file and return the recognized text.
    pub fn recognize_file(&mut self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path)?;
        self.recognize(&bytes)
    }

    /// Run recognition over in-memory image bytes.
    pub fn recognize(&mut self, image: &[u8]) -> Result<String, ExtractionError> {
        let tess = match self.tess.take() {
            Some(tess) => tess,
            None => self.init()?,
        };

        // set_image_from_mem consumes the instance; on failure it is gone and
        // the next call re-initializes.
        let mut tess = tess
            .set_image_from_mem(image)
            .map_err(|e| ExtractionError::OcrProcessing(format!("{e:?}")))?;

        match tess.get_text() {
            Ok(text) => {
                self.tess = Some(tess);
                Ok(text)
            }
            // A failed recognition forfeits the possibly-wedged instance;
            // the next call re-initializes.
            Err(e) => Err(ExtractionError::OcrProcessing(format!("{e:?}"))),
        }
    }
}
