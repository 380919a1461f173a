//! Infrastructure adapters for unfurl.
//!
//! This crate implements the ports defined in `unfurl-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_catalogs;
pub mod catalog_loader;
pub mod catalog_store;
pub mod filesystem;

// Re-export commonly used adapters
pub use catalog_loader::DirectoryCatalogLoader;
pub use catalog_store::InMemoryCatalogStore;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
