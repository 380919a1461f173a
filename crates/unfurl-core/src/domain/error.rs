// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Matching never produces a `DomainError` that aborts a run: unsafe or blank
/// candidate paths are reported and skipped by the service. These errors are
/// fatal only when they come from trusted configuration (scaffold catalogues).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Path Errors
    // ========================================================================
    #[error("Path is empty after normalization")]
    EmptyPath,

    #[error("Unsafe path '{path}': {reason}")]
    UnsafePath { path: String, reason: String },

    // ========================================================================
    // Catalogue Errors
    // ========================================================================
    #[error("Invalid scaffold catalogue: {0}")]
    InvalidCatalog(String),

    #[error("Duplicate path in scaffold catalogue '{catalog}': {path}")]
    DuplicateScaffoldEntry { catalog: String, path: String },

    // ========================================================================
    // Rule Errors
    // ========================================================================
    #[error("Invalid reasoning marker '{0}'")]
    InvalidMarker(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsafePath { path, .. } => vec![
                format!("'{}' would escape the output directory", path),
                "Use paths relative to the project root without '..' segments".into(),
            ],
            Self::InvalidCatalog(msg) => vec![
                "Check the scaffold catalogue definition".into(),
                format!("Details: {}", msg),
            ],
            Self::DuplicateScaffoldEntry { catalog, path } => vec![
                format!("Catalogue '{}' lists '{}' more than once", catalog, path),
                "Remove the duplicate entry".into(),
            ],
            Self::InvalidMarker(tag) => vec![
                format!("'{}' is not a usable reasoning tag", tag),
                "Tags must be non-empty, e.g. \"think\"".into(),
            ],
            Self::EmptyPath => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyPath
            | Self::UnsafePath { .. }
            | Self::InvalidCatalog(_)
            | Self::DuplicateScaffoldEntry { .. }
            | Self::InvalidMarker(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
