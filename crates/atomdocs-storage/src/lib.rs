//! Storage abstraction for atomdocs documentation sources.
//!
//! The [`Storage`] trait hides where Markdown sources live so that the page
//! controller can be tested without touching the real filesystem.
//!
//! - [`FsStorage`] reads from a directory and refuses paths that escape it
//! - [`MockStorage`] keeps files in memory (behind the `mock` feature)

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind};
