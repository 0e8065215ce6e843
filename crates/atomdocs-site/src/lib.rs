//! Page resolution, pagination and rendering for atomdocs.
//!
//! This crate provides:
//! - [`PageResolver`]: maps docs and legacy URLs onto Markdown source files
//! - [`PathIndex`] and [`paginate`]: document order and previous/next links
//! - [`Site`]: the page controller producing a [`RenderPayload`] per request
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use atomdocs_config::NavigationTree;
//! use atomdocs_site::{Site, SiteConfig};
//! use atomdocs_storage::FsStorage;
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("app/docs")));
//! let site = Site::new(storage, Arc::new(NavigationTree::new()), SiteConfig::default());
//!
//! let request = site.request().with_page1("routing");
//! let payload = site.render(&request)?;
//! # Ok(())
//! # }
//! ```

mod index;
mod page;
mod pagination;
mod resolver;
mod site;

pub use index::PathIndex;
pub use page::{NOT_FOUND_CONTENT, NOT_FOUND_TITLE, PageStatus, RenderPayload, page_title};
pub use pagination::{Pagination, page_url, paginate};
pub use resolver::{
    DOCS_RESOURCE, INDEX_PAGE, PageLocation, PageNotFound, PageRequest, PageResolver, source_path,
};
pub use site::{MissingPage, RenderError, Site, SiteConfig};
