//! Error handling for the unfurl CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use unfurl_core::error::UnfurlError;

pub use unfurl_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Usage line printed with [`CliError::MissingArgument`].
pub const USAGE: &str = "unfurl <INPUT> [OUTPUT] [OPTIONS]";

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required positional argument was not supplied.
    #[error("Missing required argument <{name}>")]
    MissingArgument { name: &'static str },

    /// The input document does not exist or is not a regular file.
    #[error("File not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Invalid user input (validation failed).
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `unfurl-core`.
    #[error("Extraction failed: {0}")]
    Core(#[from] UnfurlError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be rendered as JSON.
    #[error("Failed to serialise output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::ConfigError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingArgument { .. } => vec![
                format!("Usage: {USAGE}"),
                "Use --help for usage information".into(),
            ],

            Self::InputNotFound { path } => vec![
                format!("Check that '{}' exists and is a file", path.display()),
                "Nothing was written".into(),
            ],

            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                format!(
                    "Check your config file (default: {})",
                    crate::config::AppConfig::config_path().display()
                ),
                "Environment overrides use UNFURL_<SECTION>__<KEY>".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check that the input is UTF-8 text".into(),
            ],

            Self::Serialization(_) => vec!["Retry without --output-format json".into()],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingArgument { .. } => ErrorCategory::UserError,
            Self::InputNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Io => ErrorCategory::Io,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Io,
            Self::Serialization(_) => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | Configuration |  4   |
    /// | Anything else |  1   |
    ///
    /// Command-line parse failures exit with 2 before a `CliError` exists.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Configuration => 4,
            ErrorCategory::UserError
            | ErrorCategory::NotFound
            | ErrorCategory::Io
            | ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "\u{2717}".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "\u{2192}".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Io => tracing::error!("I/O error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (missing or invalid arguments).
    UserError,
    /// Input document or scaffold catalogue not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Reading the document or writing the project failed.
    Io,
    /// Internal/system error.
    Internal,
}

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: format!("{}: {e}", f().into()),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, UnfurlError> {
    /// Core errors already carry their own context; the message is unused.
    fn with_cli_context<F, S>(self, _f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(CliError::Core)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use unfurl_core::application::ApplicationError;

    #[test]
    fn missing_argument_prints_usage() {
        let err = CliError::MissingArgument { name: "INPUT" };
        assert!(err.suggestions().iter().any(|s| s.contains("Usage:")));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn input_not_found_exits_one() {
        let err = CliError::InputNotFound {
            path: PathBuf::from("missing.md"),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn unknown_catalogue_exits_one_and_lists_names() {
        let err = CliError::Core(
            ApplicationError::CatalogNotFound {
                name: "rails".into(),
                available: vec!["nextjs".into(), "none".into()],
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.exit_code(), 1);
        assert!(err.suggestions().iter().any(|s| s.contains("nextjs, none")));
    }

    #[test]
    fn write_failure_exits_one() {
        let err = CliError::Core(
            ApplicationError::FilesystemError {
                path: PathBuf::from("out/a.ts"),
                reason: "denied".into(),
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::InputNotFound {
            path: PathBuf::from("/tmp/x.md"),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err: CliError = io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8").into();
        let s = err.format_plain(true);
        assert!(s.contains("Caused by:"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading input");
        match cli {
            Err(CliError::IoError { message, .. }) => assert!(message.starts_with("reading input")),
            other => panic!("expected IoError, got {other:?}"),
        }
    }
}
