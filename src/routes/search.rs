//! Search route
//!
//! GET /search - case-insensitive substring search over stored document text.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::{Document, DocumentRepository};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Number of characters of text content returned as a preview
const SNIPPET_CHARS: usize = 100;

/// Create the search router
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search_documents))
}

/// Query parameters for document search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Substring to match; missing and empty are both rejected
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    10
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub file_name: String,
    pub upload_date: String,
    pub snippet: String,
}

impl From<Document> for SearchResult {
    fn from(document: Document) -> Self {
        let snippet = document
            .text_content
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(SNIPPET_CHARS)
            .collect();

        Self {
            file_name: document.file_name,
            upload_date: document.upload_date,
            snippet,
        }
    }
}

/// GET /search?query=<string>&limit=<int>&offset=<int>
///
/// Matches `query` as a case-insensitive substring of stored text, in
/// insertion order, sliced by `offset` then `limit` (default 10).
async fn search_documents(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    if params.query.is_empty() {
        return Err(AppError::BadRequest(
            "Please provide a search query".to_string(),
        ));
    }

    let repository = DocumentRepository::new(state.db());
    let documents = repository
        .find_by_substring(&params.query, params.limit, params.offset)
        .await?;

    Ok(Json(SearchResponse {
        results: documents.into_iter().map(SearchResult::from).collect(),
    }))
}
