use crate::config::Config;
use crate::types::DocumentType;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

// API Request/Response types

/// Per-file output unit. Immutable once produced.
///
/// Serialized camelCase: `fileName`, `documentType`, `extractedText`,
/// `sourcePath`. For Error-typed records `extracted_text` carries a
/// human-readable message instead of document content.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub file_name: String,
    pub document_type: DocumentType,
    pub extracted_text: String,
    pub source_path: String,
}

impl DocumentRecord {
    pub fn error(
        file_name: impl Into<String>,
        source_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            document_type: DocumentType::Error,
            extracted_text: message.into(),
            source_path: source_path.into(),
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
