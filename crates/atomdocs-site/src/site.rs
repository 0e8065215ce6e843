//! Page controller.
//!
//! [`Site`] ties the resolver, storage, renderer and pagination together and
//! produces one [`RenderPayload`] per request.

use std::path::PathBuf;
use std::sync::Arc;

use atomdocs_config::NavigationTree;
use atomdocs_renderer::MarkdownRenderer;
use atomdocs_storage::{Storage, StorageError};

use crate::index::PathIndex;
use crate::page::{
    NOT_FOUND_CONTENT, NOT_FOUND_TITLE, PageStatus, RenderPayload, page_title,
};
use crate::pagination::paginate;
use crate::resolver::{PageLocation, PageNotFound, PageRequest, PageResolver, source_path};

/// Error returned when page rendering fails for a reason other than a
/// missing page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Source file exists but couldn't be read.
    #[error("I/O error: {0}")]
    Io(#[from] StorageError),
}

/// Configuration for [`Site`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Version served when a request names none, and the target of legacy
    /// URLs.
    pub default_version: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_version: atomdocs_config::DEFAULT_VERSION.to_owned(),
        }
    }
}

/// A navigation entry with no backing source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingPage {
    pub version: String,
    pub page_key: String,
    pub source_path: PathBuf,
}

/// Versioned documentation site.
///
/// Immutable after construction and cheap to share behind an [`Arc`].
pub struct Site {
    storage: Arc<dyn Storage>,
    navigation: Arc<NavigationTree>,
    resolver: PageResolver,
    renderer: MarkdownRenderer,
}

impl Site {
    /// Create a new site.
    #[must_use]
    pub fn new(
        storage: Arc<dyn Storage>,
        navigation: Arc<NavigationTree>,
        config: SiteConfig,
    ) -> Self {
        Self {
            storage,
            navigation,
            resolver: PageResolver::new(config.default_version),
            renderer: MarkdownRenderer::new(),
        }
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationTree {
        &self.navigation
    }

    #[must_use]
    pub fn default_version(&self) -> &str {
        self.resolver.default_version()
    }

    /// Versions in configured order.
    #[must_use]
    pub fn versions(&self) -> Vec<String> {
        self.navigation.versions().map(str::to_owned).collect()
    }

    /// Request for the default version's index page.
    #[must_use]
    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.default_version())
    }

    /// Render a page request.
    ///
    /// Missing pages are not errors: they produce a payload with
    /// [`PageStatus::NotFound`] and the usual chrome.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] if the source file exists but can't be
    /// read.
    pub fn render(&self, request: &PageRequest) -> Result<RenderPayload, RenderError> {
        let location = match self.resolver.resolve(self.storage.as_ref(), request) {
            Ok(location) => location,
            Err(PageNotFound { location }) => {
                tracing::debug!(
                    version = %location.version,
                    page = %location.page_key(),
                    "Page not found"
                );
                return Ok(self.not_found(&location));
            }
        };

        let path = location.source_path();
        let markdown = match self.storage.read(&path) {
            Ok(markdown) => markdown,
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %path.display(), "Page vanished before read");
                return Ok(self.not_found(&location));
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to read page");
                return Err(e.into());
            }
        };

        let content = self.renderer.render_markdown(&markdown);
        let page = location.page_key();
        let pagination = paginate(&self.navigation, &location.version, &page);

        Ok(RenderPayload {
            status: PageStatus::Found,
            title: page_title(&location),
            versions: self.versions(),
            navigation: self.navigation.get(&location.version).cloned(),
            content,
            previous_page_url: pagination.previous_url,
            next_page_url: pagination.next_url,
            source_mtime: self.storage.mtime(&path).ok(),
            version: location.version,
            page,
        })
    }

    /// Payload for a page that doesn't exist.
    #[must_use]
    pub fn not_found(&self, location: &PageLocation) -> RenderPayload {
        RenderPayload {
            status: PageStatus::NotFound,
            title: NOT_FOUND_TITLE.to_owned(),
            version: location.version.clone(),
            versions: self.versions(),
            page: location.page_key(),
            navigation: self.navigation.get(&location.version).cloned(),
            content: NOT_FOUND_CONTENT.to_owned(),
            previous_page_url: None,
            next_page_url: None,
            source_mtime: None,
        }
    }

    /// Not found payload for URLs that match no route.
    #[must_use]
    pub fn not_found_default(&self) -> RenderPayload {
        self.not_found(&self.resolver.normalize(&self.request()))
    }

    /// Navigation entries whose source file is missing, in document order.
    #[must_use]
    pub fn check(&self) -> Vec<MissingPage> {
        let mut missing = Vec::new();
        for (version, section) in self.navigation.iter() {
            for key in PathIndex::flatten(section).iter() {
                let path = source_path(version, key);
                if !self.storage.exists(&path) {
                    missing.push(MissingPage {
                        version: version.to_owned(),
                        page_key: key.to_owned(),
                        source_path: path,
                    });
                }
            }
        }
        missing
    }
}
