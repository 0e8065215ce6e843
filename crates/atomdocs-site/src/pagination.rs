//! Previous/next links between pages.

use atomdocs_config::NavigationTree;
use serde::Serialize;

use crate::index::PathIndex;

/// Links to the neighbours of a page in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub previous_url: Option<String>,
    pub next_url: Option<String>,
}

/// URL of a page given its dotted key.
///
/// ```
/// assert_eq!(
///     atomdocs_site::page_url("beta", "database.migrations"),
///     "/docs/beta/database/migrations"
/// );
/// ```
#[must_use]
pub fn page_url(version: &str, page_key: &str) -> String {
    format!("/docs/{version}/{}", page_key.replace('.', "/"))
}

/// Compute pagination for `page_key` within `version`.
///
/// The index is rebuilt on every call. Unknown versions and keys yield no
/// links.
#[must_use]
pub fn paginate(navigation: &NavigationTree, version: &str, page_key: &str) -> Pagination {
    let Some(section) = navigation.get(version) else {
        return Pagination::default();
    };
    let index = PathIndex::flatten(section);
    Pagination {
        previous_url: index.previous(page_key).map(|key| page_url(version, key)),
        next_url: index.next(page_key).map(|key| page_url(version, key)),
    }
}

#[cfg(test)]
mod tests {
    use atomdocs_config::Section;
    use pretty_assertions::assert_eq;

    use super::*;

    fn tree() -> NavigationTree {
        NavigationTree::new()
            .with_version(
                "beta",
                Section::new().with_leaf("index", "Introduction").with_section(
                    "database",
                    Section::new()
                        .with_leaf("index", "Getting Started")
                        .with_leaf("migrations", "Migrations"),
                ),
            )
            .with_version("v1", Section::new().with_leaf("index", "Introduction"))
    }

    #[test]
    fn test_last_page_has_no_next() {
        assert_eq!(
            paginate(&tree(), "beta", "database.migrations"),
            Pagination {
                previous_url: Some("/docs/beta/database/index".to_owned()),
                next_url: None,
            }
        );
    }

    #[test]
    fn test_first_page_has_no_previous() {
        assert_eq!(
            paginate(&tree(), "beta", "index"),
            Pagination {
                previous_url: None,
                next_url: Some("/docs/beta/database/index".to_owned()),
            }
        );
    }

    #[test]
    fn test_middle_page() {
        let pagination = paginate(&tree(), "beta", "database.index");

        assert_eq!(pagination.previous_url.as_deref(), Some("/docs/beta/index"));
        assert_eq!(
            pagination.next_url.as_deref(),
            Some("/docs/beta/database/migrations")
        );
    }

    #[test]
    fn test_single_page_version() {
        assert_eq!(paginate(&tree(), "v1", "index"), Pagination::default());
    }

    #[test]
    fn test_unknown_version_or_key() {
        assert_eq!(paginate(&tree(), "v9", "index"), Pagination::default());
        assert_eq!(paginate(&tree(), "beta", "missing"), Pagination::default());
    }

    #[test]
    fn test_urls_are_versioned() {
        let tree = tree();
        for version in tree.versions() {
            let index = PathIndex::flatten(tree.get(version).unwrap());
            for key in index.iter() {
                let pagination = paginate(&tree, version, key);
                for url in [pagination.previous_url, pagination.next_url]
                    .into_iter()
                    .flatten()
                {
                    assert!(url.starts_with(&format!("/docs/{version}/")));
                    assert!(!url.contains('.'));
                }
            }
        }
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(paginate(&tree(), "beta", "index")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "previousUrl": null,
                "nextUrl": "/docs/beta/database/index",
            })
        );
    }
}
