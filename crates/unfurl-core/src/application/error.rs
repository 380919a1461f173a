//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not matching.
//! Matching never fails: a rule that finds nothing yields no candidates.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed. Fatal; files already written stay.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// No scaffold catalogue with this name.
    #[error("Scaffold catalogue not found: {name}")]
    CatalogNotFound { name: String, available: Vec<String> },

    /// Store access failed (lock poisoned, etc.).
    #[error("Scaffold catalogue store error")]
    StoreLockError,

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Files written before the failure were kept".into(),
            ],
            Self::CatalogNotFound { name, available } => {
                let mut suggestions = vec![format!("No scaffold catalogue named '{}'", name)];
                if !available.is_empty() {
                    suggestions.push(format!("Available: {}", available.join(", ")));
                }
                suggestions.push("Try: unfurl --list-scaffolds".into());
                suggestions
            }
            Self::StoreLockError => vec![
                "The catalogue store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::ValidationFailed(_) => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::CatalogNotFound { .. } => ErrorCategory::NotFound,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
