//! Filesystem-based scaffold catalogue loader.
//!
//! A catalogue directory holds the scaffold files themselves, laid out as
//! they should appear in the output root, plus an optional manifest:
//!
//! ```text
//! my-scaffold/
//! ├── catalog.toml          ← manifest (optional, never an entry)
//! ├── package.json
//! └── config/
//!     └── eslint.json
//! ```
//!
//! # `catalog.toml` format
//!
//! ```toml
//! name        = "vite"                 # defaults to the directory name
//! description = "Vite + React"         # optional
//! next_steps  = ["cd {dir}", "npm i"]  # optional; {dir} is the output root
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use unfurl_core::domain::{DomainError, ScaffoldCatalog, ScaffoldEntry};

/// Manifest file name; skipped when collecting entries.
pub const MANIFEST_FILE: &str = "catalog.toml";

/// Deserialised `catalog.toml`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogManifest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

/// Loads one [`ScaffoldCatalog`] from a directory tree.
///
/// # Example
///
/// ```no_run
/// use unfurl_adapters::DirectoryCatalogLoader;
///
/// let catalog = DirectoryCatalogLoader::new("./scaffolds/vite").load()?;
/// println!("{} entries", catalog.entry_count());
/// # Ok::<(), unfurl_core::domain::DomainError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryCatalogLoader {
    dir: PathBuf,
}

impl DirectoryCatalogLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read the manifest and every regular file under the directory.
    ///
    /// Entries are ordered by relative path so runs are reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCatalog`] if the directory is missing or
    /// unreadable, a file is not UTF-8, or the manifest does not parse.
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub fn load(&self) -> Result<ScaffoldCatalog, DomainError> {
        if !self.dir.is_dir() {
            return Err(DomainError::InvalidCatalog(format!(
                "scaffold directory not found: {}",
                self.dir.display()
            )));
        }

        let manifest = self.read_manifest()?;
        let name = manifest
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| {
                self.dir
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .ok_or_else(|| {
                DomainError::InvalidCatalog(format!(
                    "cannot derive a catalogue name from '{}'",
                    self.dir.display()
                ))
            })?;

        let mut catalog =
            ScaffoldCatalog::new(name).with_description(manifest.description.unwrap_or_default());
        for step in manifest.next_steps {
            catalog = catalog.with_next_step(step);
        }

        for walk_entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .sort_by_file_name()
        {
            let walk_entry = walk_entry
                .map_err(|e| DomainError::InvalidCatalog(format!("directory walk error: {e}")))?;

            if !walk_entry.file_type().is_file() {
                continue; // Directories come from entry paths; symlinks are skipped.
            }

            let abs_path = walk_entry.path();
            let rel_raw = abs_path.strip_prefix(&self.dir).map_err(|_| {
                DomainError::InvalidCatalog(format!(
                    "failed to relativise '{}' against '{}'",
                    abs_path.display(),
                    self.dir.display()
                ))
            })?;

            let rel = rel_raw.to_string_lossy().replace('\\', "/");
            if rel == MANIFEST_FILE {
                continue;
            }

            let content = fs::read_to_string(abs_path).map_err(|e| {
                DomainError::InvalidCatalog(format!("failed to read file '{rel}': {e}"))
            })?;

            debug!(path = %rel, bytes = content.len(), "scaffold entry loaded");
            catalog.add_entry(ScaffoldEntry::try_new(rel, content)?);
        }

        catalog.validate()?;
        debug!(name = %catalog.name, entries = catalog.entry_count(), "catalogue loaded");
        Ok(catalog)
    }

    fn read_manifest(&self) -> Result<CatalogManifest, DomainError> {
        let manifest_path = self.dir.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            return Ok(CatalogManifest::default());
        }

        let raw = fs::read_to_string(&manifest_path).map_err(|e| {
            DomainError::InvalidCatalog(format!(
                "failed to read '{}': {e}",
                manifest_path.display()
            ))
        })?;

        toml::from_str(&raw).map_err(|e| {
            DomainError::InvalidCatalog(format!(
                "failed to parse '{}': {e}",
                manifest_path.display()
            ))
        })
    }
}
