//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `unfurl-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation, file writes, existence checks
//!   - `ScaffoldStore`: scaffold catalogue lookup
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, ScaffoldStore};

#[cfg(test)]
pub use output::MockFilesystem;
