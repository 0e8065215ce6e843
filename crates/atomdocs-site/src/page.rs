//! Render payload handed to the view layer.

use atomdocs_config::Section;
use serde::Serialize;

use crate::resolver::PageLocation;

/// Title of the not found page.
pub const NOT_FOUND_TITLE: &str = "404 - Page Not Found";

/// Body of the not found page.
pub const NOT_FOUND_CONTENT: &str =
    "<h2>Page not found</h2><p>The requested documentation page does not exist.</p>";

/// Outcome of a page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    Found,
    NotFound,
}

impl PageStatus {
    /// HTTP status code for this outcome.
    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            Self::Found => 200,
            Self::NotFound => 404,
        }
    }
}

/// Everything the view layer needs to render a documentation page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPayload {
    pub status: PageStatus,
    /// Page title, without site branding.
    pub title: String,
    pub version: String,
    /// All versions in configured order.
    pub versions: Vec<String>,
    /// Dotted page key, e.g. `database.migrations`.
    pub page: String,
    /// Navigation of the current version.
    pub navigation: Option<Section>,
    /// Rendered HTML body.
    pub content: String,
    pub previous_page_url: Option<String>,
    pub next_page_url: Option<String>,
    /// Source modification time (seconds since Unix epoch).
    #[serde(skip)]
    pub source_mtime: Option<f64>,
}

impl RenderPayload {
    /// Page path as used in URLs, e.g. `database/migrations`.
    #[must_use]
    pub fn page_path(&self) -> String {
        self.page.replace('.', "/")
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.status == PageStatus::Found
    }
}

/// Human-readable title for a page location.
///
/// Uses the last path segment with dashes turned into spaces and the first
/// letter capitalized: `database/query-builder` becomes `Query builder`.
#[must_use]
pub fn page_title(location: &PageLocation) -> String {
    let words = location.leaf().replace('-', " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
