//! Unified error handling for Unfurl Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Unfurl Core operations.
#[derive(Debug, Error, Clone)]
pub enum UnfurlError {
    /// Errors from the domain layer (business rule violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and I/O failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl UnfurlError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in unfurl".into(),
                "Please report this issue at: https://github.com/unfurl-dev/unfurl/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type UnfurlResult<T> = Result<T, UnfurlError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> UnfurlResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> UnfurlResult<T> {
        self.map_err(|e| UnfurlError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn filesystem_errors_are_io() {
        let err: UnfurlError = ApplicationError::FilesystemError {
            path: PathBuf::from("out/app/page.tsx"),
            reason: "Permission denied".into(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.to_string().contains("out/app/page.tsx"));
    }

    #[test]
    fn unsafe_path_is_validation() {
        let err: UnfurlError = DomainError::UnsafePath {
            path: "../etc/passwd".into(),
            reason: "contains a parent-directory segment".into(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn context_wraps_as_internal() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::other("boom"));
        let err = result.context("reading catalogue").unwrap_err();

        assert!(matches!(err, UnfurlError::Internal { .. }));
        assert!(err.to_string().contains("reading catalogue: boom"));
    }
}
