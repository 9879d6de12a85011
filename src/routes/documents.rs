//! Batch document upload endpoint.
//!
//! `POST /api/process-documents` takes a multipart form with repeated
//! `files` fields, stages every file, runs the sequential extraction and
//! classification pipeline, and returns one record per input file in upload
//! order. Staged files are deleted when the batch finishes, whether it
//! succeeded or failed.

use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use tracing::{info, warn};

use crate::intake::{BatchItem, BatchStorage};
use crate::models::{AppState, DocumentRecord};
use crate::pipeline;
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/process-documents", post(process_documents))
        .with_state(state)
}

async fn process_documents(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<Vec<DocumentRecord>>> {
    // Drain the multipart body first; uploads are small enough to buffer.
    let mut uploads: Vec<(String, Vec<u8>)> = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("files") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("document").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidRequest(format!("failed to read upload: {e}")))?;
        info!(
            name = %file_name,
            size = bytes.len(),
            mime = %mime_guess::from_path(&file_name).first_or_octet_stream(),
            "received upload"
        );
        uploads.push((file_name, bytes.to_vec()));
    }

    if uploads.is_empty() {
        return Err(AppError::NoFilesProvided);
    }
    info!(count = uploads.len(), "processing document batch");

    // Stage the batch; directory creation failure is batch-fatal.
    let mut storage = BatchStorage::create(&state.config.storage.upload_dir)?;
    let items = stage_batch(&mut storage, &uploads)?;

    // Extraction is synchronous (tesseract, lopdf); run the whole batch on
    // the blocking pool. `storage` moves in so the staged files outlive
    // processing and are cleaned up when it drops.
    let ocr_config = state.config.ocr.clone();
    let records = tokio::task::spawn_blocking(move || {
        let records = pipeline::process_batch(&items, &ocr_config);
        drop(storage);
        records
    })
    .await
    .map_err(|e| AppError::Internal(format!("pipeline task failed: {e}")))?;

    Ok(Json(records))
}

/// Stage every upload, keeping per-file save failures in the batch as
/// Error-bound items. Batch-fatal only when nothing could be persisted.
fn stage_batch(
    storage: &mut BatchStorage,
    uploads: &[(String, Vec<u8>)],
) -> AppResult<Vec<BatchItem>> {
    let mut items = Vec::with_capacity(uploads.len());
    for (file_name, bytes) in uploads {
        match storage.save(file_name, bytes) {
            Ok(stored) => items.push(BatchItem::Stored(stored)),
            Err(e) => {
                warn!(name = %file_name, "failed to save upload: {e}");
                items.push(BatchItem::SaveFailed {
                    file_name: file_name.clone(),
                    message: format!("Failed to save file: {e}"),
                });
            }
        }
    }

    if storage.saved_count() == 0 {
        return Err(AppError::NothingStored);
    }

    Ok(items)
}
