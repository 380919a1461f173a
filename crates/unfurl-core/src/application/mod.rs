//! Application layer for unfurl.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ExtractionService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! matching logic itself. All extraction rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ExtractionOptions, ExtractionReport, ExtractionService, FileOrigin, RejectedPath, WrittenFile,
};

pub use ports::{Filesystem, ScaffoldStore};

pub use error::ApplicationError;
