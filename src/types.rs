// Type definitions and enums

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Closed set of document labels the classifier can assign.
///
/// Wire labels are fixed strings; `Unknown` serializes as
/// "Unknown Document Type" and `Error` marks a file whose extraction
/// or storage failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DocumentType {
    Passport,
    Citizenship,
    #[serde(rename = "PAN Card")]
    PanCard,
    #[serde(rename = "Account Opening Form")]
    AccountOpeningForm,
    #[serde(rename = "Unknown Document Type")]
    Unknown,
    Error,
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentType::Passport => write!(f, "Passport"),
            DocumentType::Citizenship => write!(f, "Citizenship"),
            DocumentType::PanCard => write!(f, "PAN Card"),
            DocumentType::AccountOpeningForm => write!(f, "Account Opening Form"),
            DocumentType::Unknown => write!(f, "Unknown Document Type"),
            DocumentType::Error => write!(f, "Error"),
        }
    }
}

/// Batch-fatal errors. Per-file failures never reach this type; they are
/// folded into Error-typed records by the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No files provided")]
    NoFilesProvided,

    #[error("Failed to create temporary storage: {0}")]
    StorageUnavailable(String),

    #[error("Failed to save any files")]
    NothingStored,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NoFilesProvided | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::StorageUnavailable(_) | AppError::NothingStored => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
