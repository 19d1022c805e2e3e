//! Upload route
//!
//! POST /upload - multipart PDF upload, text extraction, and persistence.

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::db::DocumentRepository;
use crate::error::{AppError, Result};
use crate::pdf;
use crate::state::AppState;

/// Create the upload router
pub fn router() -> Router<AppState> {
    // No size cap on uploads
    Router::new()
        .route("/upload", post(upload_pdf))
        .layer(DefaultBodyLimit::disable())
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub extracted_text: String,
}

/// POST /upload
///
/// Expects a multipart form with a `file` field. The file is written to the
/// upload directory under its client-supplied name (verbatim, including any
/// path separators), its text is extracted, and a document row is stored.
///
/// The filesystem write and the database insert are not transactional: a
/// failed extraction leaves the saved file behind with no row.
async fn upload_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut file: Option<(String, axum::body::Bytes)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;
            file = Some((file_name, data));
            break;
        }
    }

    let (file_name, data) =
        file.ok_or_else(|| AppError::BadRequest("No file part".to_string()))?;
    if file_name.is_empty() {
        return Err(AppError::BadRequest("No selected file".to_string()));
    }

    let file_path = state.config().storage.upload_dir.join(&file_name);
    tokio::fs::write(&file_path, &data).await?;

    let text_content = pdf::extract_text(&file_path)?;

    let repository = DocumentRepository::new(state.db());
    let document = repository.create(&file_name, &text_content).await?;

    tracing::info!(
        id = document.id,
        file_name = %document.file_name,
        size = data.len(),
        "File uploaded and processed"
    );

    Ok(Json(UploadResponse {
        message: "File uploaded and processed successfully".to_string(),
        extracted_text: text_content,
    }))
}
