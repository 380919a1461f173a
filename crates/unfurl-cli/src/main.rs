//! # unfurl
//!
//! Writes the multi-file project embedded in a generated document to disk.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (`--help` / `--version` print and exit 0).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Check for INPUT, then load configuration (defaults + file + env).
//! 4. Build the [`OutputManager`].
//! 5. Run the extraction (or list catalogues).
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                             |
//! |------|-----------------------------------------------------|
//! |  0   | Success (including zero files found)                |
//! |  1   | Missing input, file not found, I/O or other failure |
//! |  2   | Unparseable command line                            |
//! |  4   | Configuration error                                 |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Help and version are "errors" that go to stdout.
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let verbose = cli.global.verbose > 0;

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // A missing INPUT is a usage error, whatever the config file says.
    if cli.extract.input.is_none() && !cli.extract.list_scaffolds {
        let err = CliError::MissingArgument { name: "INPUT" };
        return handle_error(err, verbose, cli.global.no_color);
    }

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(CliError::from(e), verbose, cli.global.no_color),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let no_color = !output.supports_color();

    // ── 5. Run + 6. Error handling ───────────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("unfurl completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if cli.extract.list_scaffolds {
        return commands::scaffolds::execute(&cli.extract, &config, output);
    }
    commands::extract::execute(cli.extract, config, output)
}

/// Translate a `CliError` into a user message on stderr and an exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    let msg = if !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
