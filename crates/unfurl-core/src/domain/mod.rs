//! Core domain layer for unfurl.
//!
//! This module contains the extraction logic: sanitizing, the ordered rule
//! chain, first-match-wins registration, and scaffold catalogues. All I/O is
//! handled via ports (traits) defined in the application layer.
//!
//! - **No async**: extraction is synchronous and single-threaded
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable inputs**: a `Document` is never mutated
//! - **Reentrant**: the registry is local to one run, there is no global state
//!   besides compiled patterns
//!
pub mod entities;
pub mod error;
pub mod rules;
pub mod sanitizer;

mod validation;

pub use entities::{
    Candidate, Document, FileRecord, FileRegistry, ProjectPath, ScaffoldCatalog, ScaffoldEntry,
    candidate::normalize_path,
};

pub use error::{DomainError, ErrorCategory};
pub use rules::{ExtractionRule, RECOGNIZED_EXTENSIONS, RuleChain};
pub use sanitizer::Sanitizer;
pub use validation::DomainValidator;
