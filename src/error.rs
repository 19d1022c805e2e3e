//! Error types for the PDF Archive Server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Body for server errors
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

/// Client errors use the service's `{"message": ...}` body contract
fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "message": message })),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => bad_request(message),
            AppError::Multipart(e) => bad_request(e.to_string()),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                server_error("database_error", "Database error")
            }
            AppError::PdfExtraction(e) => {
                tracing::error!("PDF extraction error: {}", e);
                server_error("extraction_error", "Failed to extract text from PDF")
            }
            AppError::Io(e) => {
                tracing::error!("IO error: {}", e);
                server_error("io_error", "IO error")
            }
        }
    }
}

fn server_error(error: &str, message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        }),
    )
        .into_response()
}
