//! Global arguments shared by every invocation.
//!
//! Declared here and flattened into [`super::Cli`].

use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global arguments.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Warnings and errors
    -v      - Info level (one line per file written)
    -vv     - Debug level (rule matches, discarded candidates)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(long = "no-color", env = "NO_COLOR", help = "Disable colored output")]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Machine-readable output format.
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Human-readable with colors.
    Human,
    /// Plain text without colors.
    Plain,
    /// JSON report on stdout.
    Json,
}
