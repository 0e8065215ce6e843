//! Static CSS and JavaScript for atomdocs pages.
//!
//! Provides a single API for accessing assets in both embedded and
//! filesystem modes:
//!
//! - **`embed` feature on**: assets are compiled into the binary via `rust-embed`
//! - **`embed` feature off**: assets are read from this crate's `assets/`
//!   directory at runtime, so edits show up without a rebuild

use std::borrow::Cow;
#[cfg(not(feature = "embed"))]
use std::path::{Component, Path};

/// Embedded assets (only available with `embed` feature).
#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "assets"]
struct Assets;

/// Directory for filesystem-based asset serving.
#[cfg(not(feature = "embed"))]
const ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// Stylesheet linked from every page.
pub const STYLESHEET: &str = "css/docs.css";

/// Script linked from every page.
pub const SCRIPT: &str = "js/docs.js";

/// Get an asset by path (relative to `assets/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(feature = "embed")]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Get an asset by path (relative to `assets/`).
///
/// Returns the file contents if the asset exists, `None` otherwise. Paths
/// leaving the assets directory are never read.
#[cfg(not(feature = "embed"))]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    let rel = Path::new(path);
    if !rel.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    std::fs::read(Path::new(ASSETS_DIR).join(rel))
        .ok()
        .map(Cow::Owned)
}

/// Return the MIME type string for the given file path.
pub fn mime_for(path: &str) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_mime_for_known_types() {
        assert_eq!(mime_for("css/docs.css"), "text/css");
        assert_eq!(mime_for("index.html"), "text/html");
        assert_eq!(mime_for("logo.png"), "image/png");
    }

    #[test]
    fn test_mime_for_unknown_type() {
        assert_eq!(mime_for("file.unknown_ext_xyz"), "application/octet-stream");
    }

    #[test]
    fn test_page_assets_exist() {
        let css = get(STYLESHEET).unwrap();
        assert!(std::str::from_utf8(&css).unwrap().contains("#sidebar"));
        assert!(get(SCRIPT).is_some());
    }

    #[test]
    fn test_get_nonexistent_asset() {
        assert!(get("nonexistent_file_that_does_not_exist.txt").is_none());
    }

    #[test]
    fn test_get_rejects_traversal() {
        assert!(get("../Cargo.toml").is_none());
    }
}
