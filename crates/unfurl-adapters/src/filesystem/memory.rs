//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use unfurl_core::{
    application::{ApplicationError, ports::Filesystem},
    error::UnfurlResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can hand one clone to a service
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// Seed a file as if it had been written by an earlier run.
    pub fn seed_file(&self, path: impl AsRef<Path>, content: &str) -> UnfurlResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.write_file(path, content)
    }

    /// Make writes under `path` fail, to exercise error handling.
    pub fn deny_writes(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.as_ref().to_path_buf());
        }
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> UnfurlResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> UnfurlResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.read_only.iter().any(|ro| path.starts_with(ro)) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}
