//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{docs, navigation};
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// Static segments take precedence over captures, so `/docs/...`,
/// `/api/...` and `/assets/...` never reach the legacy routes.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let docs_routes = Router::new()
        .route("/", get(docs::get_home))
        .route("/docs", get(docs::get_home))
        .route("/docs/{version}", get(docs::get_docs_page))
        .route("/docs/{version}/{page1}", get(docs::get_docs_page))
        .route("/docs/{version}/{page1}/{page2}", get(docs::get_docs_page));

    let legacy_routes = Router::new()
        .route("/{resource}", get(docs::get_legacy_page))
        .route("/{resource}/{version}", get(docs::get_legacy_page));

    Router::new()
        .route("/api/navigation", get(navigation::get_navigation))
        .route("/assets/{*path}", get(static_files::serve_asset))
        .merge(docs_routes)
        .merge(legacy_routes)
        .fallback(docs::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
