//! Navigation API endpoint.
//!
//! Returns the configured navigation of every version.

use std::sync::Arc;

use atomdocs_config::NavigationTree;
use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Versions in configured order.
    versions: Vec<String>,
    /// Navigation tree keyed by version.
    navigation: NavigationTree,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(State(state): State<Arc<AppState>>) -> Json<NavigationResponse> {
    Json(NavigationResponse {
        versions: state.site.versions(),
        navigation: state.site.navigation().clone(),
    })
}
