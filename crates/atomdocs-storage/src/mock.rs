//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::storage::{Storage, StorageError, StorageErrorKind};

const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Files live in memory. Reads of paths registered with
/// [`MockStorage::with_read_error`] fail with the given kind while the file
/// still reports as existing, which mimics a file that disappears or becomes
/// unreadable between the existence check and the read.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use atomdocs_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new().with_file("beta/index.md", "# Welcome");
///
/// assert!(storage.exists(Path::new("beta/index.md")));
/// assert_eq!(storage.read(Path::new("beta/index.md")).unwrap(), "# Welcome");
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: RwLock<HashMap<PathBuf, String>>,
    mtimes: RwLock<HashMap<PathBuf, f64>>,
    read_errors: RwLock<HashMap<PathBuf, StorageErrorKind>>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files
            .write()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    /// Set the modification time reported for a file.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_mtime(self, path: impl Into<PathBuf>, mtime: f64) -> Self {
        self.mtimes.write().unwrap().insert(path.into(), mtime);
        self
    }

    /// Make reads of `path` fail with `kind`.
    ///
    /// The path still reports as existing.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_read_error(self, path: impl Into<PathBuf>, kind: StorageErrorKind) -> Self {
        self.read_errors.write().unwrap().insert(path.into(), kind);
        self
    }
}

impl Storage for MockStorage {
    fn read(&self, path: &Path) -> Result<String, StorageError> {
        if let Some(kind) = self.read_errors.read().unwrap().get(path) {
            return Err(StorageError::new(*kind)
                .with_path(path)
                .with_backend(BACKEND));
        }
        self.files
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().unwrap().contains_key(path)
            || self.read_errors.read().unwrap().contains_key(path)
    }

    fn mtime(&self, path: &Path) -> Result<f64, StorageError> {
        if !self.exists(path) {
            return Err(StorageError::not_found(path).with_backend(BACKEND));
        }
        Ok(self
            .mtimes
            .read()
            .unwrap()
            .get(path)
            .copied()
            .unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_storage() {
        let storage = MockStorage::new();

        assert!(!storage.exists(Path::new("beta/index.md")));
        assert!(storage.read(Path::new("beta/index.md")).unwrap_err().is_not_found());
    }

    #[test]
    fn test_with_file() {
        let storage = MockStorage::new().with_file("beta/routing.md", "# Routing");

        assert!(storage.exists(Path::new("beta/routing.md")));
        assert_eq!(
            storage.read(Path::new("beta/routing.md")).unwrap(),
            "# Routing"
        );
    }

    #[test]
    fn test_mtime() {
        let storage = MockStorage::new()
            .with_file("beta/index.md", "# Index")
            .with_mtime("beta/index.md", 1_700_000_000.0)
            .with_file("beta/routing.md", "# Routing");

        assert_eq!(
            storage.mtime(Path::new("beta/index.md")).unwrap(),
            1_700_000_000.0
        );
        assert_eq!(storage.mtime(Path::new("beta/routing.md")).unwrap(), 0.0);
        assert!(storage.mtime(Path::new("beta/missing.md")).is_err());
    }

    #[test]
    fn test_read_error_injection() {
        let storage = MockStorage::new()
            .with_read_error("beta/locked.md", StorageErrorKind::PermissionDenied);

        assert!(storage.exists(Path::new("beta/locked.md")));
        let err = storage.read(Path::new("beta/locked.md")).unwrap_err();
        assert_eq!(err.kind(), StorageErrorKind::PermissionDenied);
        assert_eq!(err.backend(), Some("Mock"));
    }
}
