//! Static file serving.
//!
//! Serves the page stylesheet and script under `/assets/` from
//! `atomdocs-assets` in both embedded and filesystem modes.

use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Handle `GET /assets/{*path}`.
pub(crate) async fn serve_asset(Path(path): Path<String>) -> Response {
    match atomdocs_assets::get(&path) {
        Some(content) => (
            [
                (header::CONTENT_TYPE, atomdocs_assets::mime_for(&path)),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            content.into_owned(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
