//! Request to source file resolution.
//!
//! Two URL shapes reach the resolver:
//!
//! - `/docs/{version}/{page1}/{page2}` with trailing segments optional
//! - legacy `/{page1}` and `/{page1}/{page2}` without a version segment
//!
//! Legacy requests arrive with the first segment in `resource` and the second
//! in `version`, and are rewritten onto the default version before the
//! source path is built.

use std::path::PathBuf;

use atomdocs_storage::Storage;

/// Resource name of versioned documentation URLs.
pub const DOCS_RESOURCE: &str = "docs";

/// Page served when a request names no page.
pub const INDEX_PAGE: &str = "index";

/// Source file extension.
const SOURCE_EXTENSION: &str = ".md";

/// Raw route parameters of a page request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub resource: String,
    pub version: String,
    pub page1: String,
    /// Empty when absent.
    pub page2: String,
}

impl PageRequest {
    /// Request for the index page of `default_version`.
    #[must_use]
    pub fn new(default_version: impl Into<String>) -> Self {
        Self {
            resource: DOCS_RESOURCE.to_owned(),
            version: default_version.into(),
            page1: INDEX_PAGE.to_owned(),
            page2: String::new(),
        }
    }

    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_page1(mut self, page1: impl Into<String>) -> Self {
        self.page1 = page1.into();
        self
    }

    #[must_use]
    pub fn with_page2(mut self, page2: impl Into<String>) -> Self {
        self.page2 = page2.into();
        self
    }

    /// Whether this is a legacy URL without a version segment.
    #[must_use]
    pub fn is_legacy(&self) -> bool {
        self.resource != DOCS_RESOURCE
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(atomdocs_config::DEFAULT_VERSION)
    }
}

/// A normalized page request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLocation {
    pub version: String,
    pub page1: String,
    pub page2: Option<String>,
}

impl PageLocation {
    /// Dotted navigation key, e.g. `database.migrations`.
    #[must_use]
    pub fn page_key(&self) -> String {
        match &self.page2 {
            Some(page2) => format!("{}.{page2}", self.page1),
            None => self.page1.clone(),
        }
    }

    /// Page path as used in URLs, e.g. `database/migrations`.
    #[must_use]
    pub fn page_path(&self) -> String {
        match &self.page2 {
            Some(page2) => format!("{}/{page2}", self.page1),
            None => self.page1.clone(),
        }
    }

    /// Source file path relative to the documentation root.
    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        let mut path = PathBuf::from(&self.version);
        path.push(&self.page1);
        if let Some(page2) = &self.page2 {
            path.push(page2);
        }
        with_source_extension(path)
    }

    /// Last segment of the page path.
    #[must_use]
    pub fn leaf(&self) -> &str {
        self.page2.as_deref().unwrap_or(&self.page1)
    }
}

/// Source file path for a dotted navigation key.
#[must_use]
pub fn source_path(version: &str, page_key: &str) -> PathBuf {
    let mut path = PathBuf::from(version);
    path.extend(page_key.split('.'));
    with_source_extension(path)
}

fn with_source_extension(path: PathBuf) -> PathBuf {
    let mut path = path.into_os_string();
    path.push(SOURCE_EXTENSION);
    PathBuf::from(path)
}

/// Returned when a request resolves to a file that doesn't exist.
///
/// Carries the normalized location so the caller can still build the page
/// chrome.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Page not found: {}", .location.source_path().display())]
pub struct PageNotFound {
    pub location: PageLocation,
}

/// Maps page requests onto source files.
#[derive(Clone, Debug)]
pub struct PageResolver {
    default_version: String,
}

impl PageResolver {
    #[must_use]
    pub fn new(default_version: impl Into<String>) -> Self {
        Self {
            default_version: default_version.into(),
        }
    }

    #[must_use]
    pub fn default_version(&self) -> &str {
        &self.default_version
    }

    /// Normalize a request without touching storage.
    ///
    /// A legacy request `(resource, version)` becomes
    /// `(default_version, resource, version)`, except that a second segment
    /// equal to the default version is dropped.
    #[must_use]
    pub fn normalize(&self, request: &PageRequest) -> PageLocation {
        let (version, page1, page2) = if request.is_legacy() {
            let page2 = if request.version == self.default_version {
                ""
            } else {
                request.version.as_str()
            };
            (self.default_version.as_str(), request.resource.as_str(), page2)
        } else {
            (
                request.version.as_str(),
                request.page1.as_str(),
                request.page2.as_str(),
            )
        };

        PageLocation {
            version: version.to_owned(),
            page1: page1.to_owned(),
            page2: (!page2.is_empty()).then(|| page2.to_owned()),
        }
    }

    /// Normalize a request and check that its source file exists.
    pub fn resolve(
        &self,
        storage: &dyn Storage,
        request: &PageRequest,
    ) -> Result<PageLocation, PageNotFound> {
        let location = self.normalize(request);
        let path = location.source_path();
        if storage.exists(&path) {
            tracing::debug!(path = %path.display(), "Resolved page");
            Ok(location)
        } else {
            Err(PageNotFound { location })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use atomdocs_storage::MockStorage;
    use pretty_assertions::assert_eq;

    use super::*;

    fn resolver() -> PageResolver {
        PageResolver::new("beta")
    }

    fn location(version: &str, page1: &str, page2: Option<&str>) -> PageLocation {
        PageLocation {
            version: version.to_owned(),
            page1: page1.to_owned(),
            page2: page2.map(str::to_owned),
        }
    }

    #[test]
    fn test_default_request() {
        let request = PageRequest::default();

        assert_eq!(request.resource, "docs");
        assert_eq!(request.version, "beta");
        assert_eq!(request.page1, "index");
        assert_eq!(request.page2, "");
        assert!(!request.is_legacy());
    }

    #[test]
    fn test_normalize_docs_request() {
        let request = PageRequest::new("beta").with_page1("routing");

        assert_eq!(
            resolver().normalize(&request),
            location("beta", "routing", None)
        );
    }

    #[test]
    fn test_normalize_docs_request_with_page2() {
        let request = PageRequest::new("beta")
            .with_version("v1")
            .with_page1("database")
            .with_page2("migrations");

        assert_eq!(
            resolver().normalize(&request),
            location("v1", "database", Some("migrations"))
        );
    }

    #[test]
    fn test_normalize_legacy_single_segment() {
        let request = PageRequest::new("beta").with_resource("routing");

        assert_eq!(
            resolver().normalize(&request),
            location("beta", "routing", None)
        );
    }

    #[test]
    fn test_normalize_legacy_two_segments() {
        let request = PageRequest::new("beta")
            .with_resource("database")
            .with_version("migrations");

        assert_eq!(
            resolver().normalize(&request),
            location("beta", "database", Some("migrations"))
        );
    }

    #[test]
    fn test_normalize_legacy_drops_default_version_segment() {
        let request = PageRequest::new("beta")
            .with_resource("database")
            .with_version("beta");

        assert_eq!(
            resolver().normalize(&request),
            location("beta", "database", None)
        );
    }

    #[test]
    fn test_legacy_uses_configured_default_version() {
        let request = PageRequest::new("stable").with_resource("routing");

        assert_eq!(
            PageResolver::new("stable").normalize(&request),
            location("stable", "routing", None)
        );
    }

    #[test]
    fn test_source_path() {
        assert_eq!(
            location("beta", "routing", None).source_path(),
            Path::new("beta/routing.md")
        );
        assert_eq!(
            location("beta", "database", Some("migrations")).source_path(),
            Path::new("beta/database/migrations.md")
        );
        assert_eq!(source_path("beta", "a.b.c"), Path::new("beta/a/b/c.md"));
    }

    #[test]
    fn test_source_path_keeps_dots_in_segments() {
        assert_eq!(
            location("beta", "v1.2", None).source_path(),
            Path::new("beta/v1.2.md")
        );
    }

    #[test]
    fn test_page_key_and_path() {
        let loc = location("beta", "database", Some("migrations"));

        assert_eq!(loc.page_key(), "database.migrations");
        assert_eq!(loc.page_path(), "database/migrations");
        assert_eq!(loc.leaf(), "migrations");
        assert_eq!(location("beta", "index", None).leaf(), "index");
    }

    #[test]
    fn test_resolve_existing() {
        let storage = MockStorage::new().with_file("beta/routing.md", "# Routing");
        let request = PageRequest::new("beta").with_page1("routing");

        let resolved = resolver().resolve(&storage, &request).unwrap();

        assert_eq!(resolved.source_path(), Path::new("beta/routing.md"));
    }

    #[test]
    fn test_legacy_resolves_to_same_file() {
        let storage = MockStorage::new().with_file("beta/routing.md", "# Routing");
        let docs = PageRequest::new("beta").with_page1("routing");
        let legacy = PageRequest::new("beta").with_resource("routing");

        assert_eq!(
            resolver().resolve(&storage, &docs).unwrap(),
            resolver().resolve(&storage, &legacy).unwrap()
        );
    }

    #[test]
    fn test_resolve_missing_carries_location() {
        let storage = MockStorage::new();
        let request = PageRequest::new("beta").with_page1("missing");

        let err = resolver().resolve(&storage, &request).unwrap_err();

        assert_eq!(err.location, location("beta", "missing", None));
        assert_eq!(err.to_string(), "Page not found: beta/missing.md");
    }
}
