//! Unfurl Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for unfurl, the
//! tool that turns a single generated text document (typically the output of
//! a language-model run) into a real project directory.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           unfurl-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ExtractionService)            │
//! │   sanitize → match → register →         │
//! │   materialize → provision → report      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, ScaffoldStore) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     unfurl-adapters (Infrastructure)    │
//! │ (LocalFilesystem, InMemoryCatalogStore) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Document, RuleChain, FileRegistry,     │
//! │  ScaffoldCatalog)                       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use unfurl_core::{
//!     application::{ExtractionOptions, ExtractionService},
//!     domain::Document,
//! };
//! # use unfurl_core::application::ports::{Filesystem, ScaffoldStore};
//! # let filesystem: Box<dyn Filesystem> = unimplemented!();
//! # let store: Box<dyn ScaffoldStore> = unimplemented!();
//!
//! // 1. Wrap the raw text
//! let document = Document::new(std::fs::read_to_string("generation.md").unwrap());
//!
//! // 2. Use application service (with injected adapters)
//! let service = ExtractionService::new(filesystem, store);
//! let report = service
//!     .run(&document, "projects/generation", &ExtractionOptions::default())
//!     .unwrap();
//! println!("{} files", report.total());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ExtractionOptions, ExtractionReport, ExtractionService, FileOrigin, WrittenFile,
        ports::{Filesystem, ScaffoldStore},
    };
    pub use crate::domain::{
        Candidate, Document, FileRecord, FileRegistry, ProjectPath, RuleChain, Sanitizer,
        ScaffoldCatalog, ScaffoldEntry,
    };
    pub use crate::error::{UnfurlError, UnfurlResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
