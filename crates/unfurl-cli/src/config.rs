//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `UNFURL_<SECTION>__<KEY>`, e.g.
//!    `UNFURL_EXTRACTION__PROJECTS_DIR=out`
//! 3. Config file: `--config <FILE>` (must exist), else the platform config
//!    dir (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Extraction settings.
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Parent of the default output root (`<projects_dir>/<input stem>`).
    pub projects_dir: PathBuf,
    /// Scaffold catalogue used when `--scaffold` is not given.
    pub scaffold: String,
    /// Tags whose blocks are stripped before matching.
    pub reasoning_tags: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                no_color: false,
                format: OutputFormat::Auto,
            },
            extraction: ExtractionConfig {
                projects_dir: PathBuf::from("projects"),
                scaffold: unfurl_adapters::builtin_catalogs::DEFAULT_CATALOG.into(),
                reasoning_tags: vec!["think".into()],
            },
        }
    }
}

impl AppConfig {
    /// Load configuration by layering defaults, file and environment.
    ///
    /// `config_file` is the path the user passed via `--config`; when given
    /// it must exist.  Otherwise [`Self::config_path`] is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path().as_path()).required(false),
        };

        Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix("UNFURL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("extraction.reasoning_tags"),
            )
            .build()?
            .try_deserialize()
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.unfurl.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "unfurl", "unfurl")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".unfurl.toml"))
    }

    /// Default output root for `input`.
    pub fn default_output(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_else(|| "project".into());
        self.extraction.projects_dir.join(stem)
    }
}
