//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Flag beats config; Auto resolves to Human (TTY) or Plain.
        let requested = match args.output_format {
            OutputFormat::Auto => config.output.format,
            explicit => explicit,
        };
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  Never suppressed.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}")
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Dimmed secondary text, e.g. the rule that produced a file.
    pub fn dim(&self, text: &str) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.dimmed().to_string()
        }
    }

    /// JSON document on stdout.  Printed even in quiet mode so pipes always
    /// receive a parseable value.
    pub fn json(&self, value: &impl serde::Serialize) -> Result<(), crate::error::CliError> {
        let rendered = serde_json::to_string_pretty(value)?;
        self.term.write_line(&rendered)?;
        Ok(())
    }

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}
