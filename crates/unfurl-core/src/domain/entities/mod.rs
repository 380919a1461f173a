pub mod candidate;
pub mod common;
pub mod document;
pub mod registry;
pub mod scaffold;

pub use crate::domain::DomainError;
pub use candidate::Candidate;
pub use common::ProjectPath;
pub use document::Document;
pub use registry::{FileRecord, FileRegistry};
pub use scaffold::{ScaffoldCatalog, ScaffoldEntry};
