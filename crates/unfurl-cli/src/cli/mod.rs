//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "unfurl",
    bin_name = "unfurl",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Write the project embedded in a generated document to disk",
    long_about = "unfurl reads a text document produced by a language model, finds \
                  every file it declares (marker comments, headings, inline \
                  references), and writes them under an output directory together \
                  with any missing build configuration.",
    after_help = "EXAMPLES:\n\
        \x20 unfurl generation.md\n\
        \x20 unfurl generation.md ./my-app\n\
        \x20 unfurl generation.md --scaffold none --dry-run\n\
        \x20 unfurl generation.md --scaffold-dir ./scaffolds/vite\n\
        \x20 unfurl --list-scaffolds",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub extract: ExtractArgs,
}

/// Arguments for an extraction run.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// The generated document to read.
    ///
    /// Optional at the parser level so `--list-scaffolds` works alone; a run
    /// without it fails with exit code 1.
    #[arg(value_name = "INPUT", help = "Generated document to extract")]
    pub input: Option<PathBuf>,

    /// Output root.  Defaults to `<projects_dir>/<input stem>`.
    #[arg(value_name = "OUTPUT", help = "Output directory")]
    pub output: Option<PathBuf>,

    /// Scaffold catalogue to provision missing build files from.
    #[arg(
        short = 's',
        long = "scaffold",
        value_name = "NAME",
        help = "Scaffold catalogue (nextjs, none, ...)"
    )]
    pub scaffold: Option<String>,

    /// Directory holding a custom scaffold catalogue.
    #[arg(
        long = "scaffold-dir",
        value_name = "DIR",
        help = "Load a scaffold catalogue from a directory"
    )]
    pub scaffold_dir: Option<PathBuf>,

    /// Reasoning tags to strip before matching; replaces the configured list.
    #[arg(
        long = "reasoning-tag",
        value_name = "TAG",
        help = "Strip <TAG>...</TAG> blocks (repeatable)"
    )]
    pub reasoning_tags: Vec<String>,

    /// Report what would be written without touching the filesystem.
    #[arg(short = 'n', long = "dry-run", help = "Preview without writing")]
    pub dry_run: bool,

    /// Print the available scaffold catalogues and exit.
    #[arg(long = "list-scaffolds", help = "List scaffold catalogues")]
    pub list_scaffolds: bool,
}
