//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "turn this document into a project".

pub mod extraction_service;

pub use extraction_service::{
    ExtractionOptions, ExtractionReport, ExtractionService, FileOrigin, RejectedPath, WrittenFile,
};
