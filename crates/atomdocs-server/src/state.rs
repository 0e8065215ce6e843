//! Application state.
//!
//! Shared state for all request handlers.

use atomdocs_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Page controller.
    pub(crate) site: Site,
    /// Site name shown in titles and the header.
    pub(crate) site_name: String,
    /// Application version for `ETag` invalidation.
    pub(crate) version: String,
}
