//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `unfurl-core` and
//! `unfurl-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(derive_level(args))));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Same level for the binary and both library crates.
fn filter_directives(level: &str) -> String {
    format!("unfurl={level},unfurl_core={level},unfurl_adapters={level}")
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn level_default() {
        assert_eq!(derive_level(&args_with(0, false)), "warn");
    }

    #[test]
    fn level_verbose() {
        assert_eq!(derive_level(&args_with(1, false)), "info");
        assert_eq!(derive_level(&args_with(2, false)), "debug");
        assert_eq!(derive_level(&args_with(3, false)), "trace");
        assert_eq!(derive_level(&args_with(10, false)), "trace");
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(3, true)), "error");
    }

    #[test]
    fn directives_cover_every_crate() {
        let directives = filter_directives("debug");
        assert!(directives.contains("unfurl=debug"));
        assert!(directives.contains("unfurl_core=debug"));
        assert!(directives.contains("unfurl_adapters=debug"));
    }
}
