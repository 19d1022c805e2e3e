//! PDF Archive Server Library
//!
//! This crate exposes the service modules so integration tests can mount the
//! same router as the server binary.
//!
//! # Modules
//!
//! - `config`: environment-driven configuration with hardcoded defaults
//! - `db`: SQLite pool, schema, and the documents repository
//! - `pdf`: page-ordered PDF text extraction
//! - `routes`: HTTP handlers for upload and search

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod pdf;
pub mod routes;
pub mod state;

use state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check(State(_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .merge(routes::upload::router())
        .merge(routes::search::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
