//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Body message for 500 responses. Details go to the log only.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Server error type.
///
/// Missing pages are rendered as regular 404 pages and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Render error from atomdocs-site.
    #[error("Render error: {0}")]
    Render(#[from] atomdocs_site::RenderError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        let status = match &self {
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, axum::Json(json!({"error": INTERNAL_ERROR_MESSAGE}))).into_response()
    }
}
