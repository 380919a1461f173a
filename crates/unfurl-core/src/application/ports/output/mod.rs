//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `unfurl-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ScaffoldCatalog;
use crate::error::UnfurlResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `unfurl_adapters::filesystem::LocalFilesystem` (production)
/// - `unfurl_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Each `write_file` call opens, writes and releases its handle before
/// returning; no two files are open at once.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> UnfurlResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> UnfurlResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for scaffold catalogue lookup.
///
/// Implemented by:
/// - `unfurl_adapters::catalog_store::InMemoryCatalogStore` (built-in and
///   directory-loaded catalogues)
pub trait ScaffoldStore: Send + Sync {
    /// Get a catalogue by name.
    fn get(&self, name: &str) -> UnfurlResult<ScaffoldCatalog>;

    /// List all available catalogues, sorted by name.
    fn list(&self) -> UnfurlResult<Vec<ScaffoldCatalog>>;

    /// Insert or replace a catalogue.
    fn insert(&self, catalog: ScaffoldCatalog) -> UnfurlResult<()>;
}
