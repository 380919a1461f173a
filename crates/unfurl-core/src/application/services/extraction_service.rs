//! Extraction Service - main application orchestrator.
//!
//! This service coordinates the entire extraction workflow:
//! 1. Resolve the scaffold catalogue
//! 2. Sanitize the document and run the rule chain
//! 3. Register candidates (first match wins)
//! 4. Materialize every record under the output root
//! 5. Provision scaffold entries the document did not supply
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, ScaffoldStore},
    domain::{
        Document, DomainValidator as validator, FileRegistry, RuleChain, Sanitizer,
        ScaffoldCatalog, ScaffoldEntry,
    },
    error::{UnfurlError, UnfurlResult},
};

/// Per-run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOptions {
    /// Name of the scaffold catalogue to provision from.
    pub scaffold: String,
    /// Compute the report without touching the filesystem.
    pub dry_run: bool,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            scaffold: "nextjs".into(),
            dry_run: false,
        }
    }
}

/// Where a written file came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FileOrigin {
    Extracted { rule: String },
    Scaffold { catalog: String },
}

/// One file the run wrote (or would write, in a dry run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub path: String,
    pub bytes: usize,
    pub origin: FileOrigin,
}

impl WrittenFile {
    pub fn is_scaffold(&self) -> bool {
        matches!(self.origin, FileOrigin::Scaffold { .. })
    }
}

/// A candidate dropped because its path would escape the output root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedPath {
    pub path: String,
    pub rule: String,
    pub reason: String,
}

/// Summary of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    pub output_root: PathBuf,
    pub catalog: String,
    pub dry_run: bool,
    pub files: Vec<WrittenFile>,
    pub rejected: Vec<RejectedPath>,
    pub next_steps: Vec<String>,
}

impl ExtractionReport {
    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn extracted(&self) -> impl Iterator<Item = &WrittenFile> {
        self.files.iter().filter(|f| !f.is_scaffold())
    }

    pub fn scaffolded(&self) -> impl Iterator<Item = &WrittenFile> {
        self.files.iter().filter(|f| f.is_scaffold())
    }
}

/// Main extraction service.
pub struct ExtractionService {
    filesystem: Box<dyn Filesystem>,
    store: Box<dyn ScaffoldStore>,
    sanitizer: Sanitizer,
    chain: RuleChain,
}

impl ExtractionService {
    /// Create a service with the default sanitizer and the standard rule chain.
    pub fn new(filesystem: Box<dyn Filesystem>, store: Box<dyn ScaffoldStore>) -> Self {
        Self {
            filesystem,
            store,
            sanitizer: Sanitizer::default(),
            chain: RuleChain::standard(),
        }
    }

    pub fn with_sanitizer(mut self, sanitizer: Sanitizer) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    pub fn with_chain(mut self, chain: RuleChain) -> Self {
        self.chain = chain;
        self
    }

    /// Run a full extraction into `output_root`.
    ///
    /// The catalogue is resolved before anything is written, so an unknown
    /// catalogue leaves the filesystem untouched.
    #[instrument(
        skip_all,
        fields(
            output_root = %output_root.as_ref().display(),
            scaffold = %options.scaffold,
            dry_run = options.dry_run
        )
    )]
    pub fn run(
        &self,
        document: &Document,
        output_root: impl AsRef<Path>,
        options: &ExtractionOptions,
    ) -> UnfurlResult<ExtractionReport> {
        let output_root = output_root.as_ref();

        // 1. Resolve catalogue
        let catalog = self.store.get(&options.scaffold)?;
        validator::validate_catalog(&catalog).map_err(UnfurlError::Domain)?;

        // 2. Sanitize + match + register
        let (registry, rejected) = self.extract(document);
        info!(
            files = registry.len(),
            rejected = rejected.len(),
            "Document matched"
        );

        // 3. Write (or plan)
        let files = if options.dry_run {
            self.plan(&registry, &catalog, output_root)
        } else {
            self.filesystem.create_dir_all(output_root)?;
            let mut files = self.materialize(&registry, output_root)?;
            files.extend(self.provision(&catalog, output_root, &registry.paths())?);
            files
        };

        info!(total = files.len(), "Extraction completed");

        Ok(ExtractionReport {
            output_root: output_root.to_path_buf(),
            catalog: catalog.name.clone(),
            dry_run: options.dry_run,
            next_steps: catalog.render_next_steps(&output_root.display().to_string()),
            files,
            rejected,
        })
    }

    /// Sanitize the document and register every candidate of the chain.
    ///
    /// Never fails. Blank and duplicate paths are dropped silently; unsafe
    /// paths are dropped and returned for reporting.
    pub fn extract(&self, document: &Document) -> (FileRegistry, Vec<RejectedPath>) {
        let sanitized = self.sanitizer.sanitize(document);
        let mut registry = FileRegistry::new();
        let mut rejected = Vec::new();

        for candidate in self.chain.extract(&sanitized) {
            let rule = candidate.rule;
            let path = candidate.normalized_path();
            match registry.register(candidate) {
                Ok(true) => debug!(rule, path = %path, "Registered file"),
                Ok(false) => {}
                Err(e) => {
                    warn!(rule, path = %path, error = %e, "Rejected unsafe path");
                    rejected.push(RejectedPath {
                        path,
                        rule: rule.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        (registry, rejected)
    }

    /// Write every record under `output_root`, overwriting existing files.
    ///
    /// The first I/O failure aborts; files already written stay.
    pub fn materialize(
        &self,
        registry: &FileRegistry,
        output_root: &Path,
    ) -> UnfurlResult<Vec<WrittenFile>> {
        let mut written = Vec::with_capacity(registry.len());

        for record in registry.records() {
            let path = output_root.join(record.path.as_path());
            self.write_with_parents(&path, &record.content)?;
            info!(path = %record.path, bytes = record.size(), rule = record.rule, "Wrote file");

            written.push(WrittenFile {
                path: record.path.to_string(),
                bytes: record.size(),
                origin: FileOrigin::Extracted {
                    rule: record.rule.to_string(),
                },
            });
        }

        Ok(written)
    }

    /// Write the catalogue entries that are neither in `already_written` nor
    /// present on disk. Never overwrites.
    pub fn provision(
        &self,
        catalog: &ScaffoldCatalog,
        output_root: &Path,
        already_written: &HashSet<String>,
    ) -> UnfurlResult<Vec<WrittenFile>> {
        let mut written = Vec::new();

        for entry in self.pending_entries(catalog, output_root, already_written) {
            let path = output_root.join(entry.path.as_path());
            self.write_with_parents(&path, &entry.content)?;
            info!(path = %entry.path, catalog = %catalog.name, "Wrote scaffold file");
            written.push(scaffold_file(entry, catalog));
        }

        Ok(written)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn plan(
        &self,
        registry: &FileRegistry,
        catalog: &ScaffoldCatalog,
        output_root: &Path,
    ) -> Vec<WrittenFile> {
        let mut files: Vec<_> = registry
            .records()
            .map(|record| WrittenFile {
                path: record.path.to_string(),
                bytes: record.size(),
                origin: FileOrigin::Extracted {
                    rule: record.rule.to_string(),
                },
            })
            .collect();

        files.extend(
            self.pending_entries(catalog, output_root, &registry.paths())
                .into_iter()
                .map(|entry| scaffold_file(entry, catalog)),
        );
        files
    }

    fn pending_entries<'a>(
        &self,
        catalog: &'a ScaffoldCatalog,
        output_root: &Path,
        already_written: &HashSet<String>,
    ) -> Vec<&'a ScaffoldEntry> {
        catalog
            .entries()
            .filter(|entry| {
                if already_written.contains(entry.path.as_str()) {
                    debug!(path = %entry.path, "Scaffold entry supplied by document");
                    return false;
                }
                if self.filesystem.exists(&output_root.join(entry.path.as_path())) {
                    info!(path = %entry.path, "Scaffold entry already on disk, skipping");
                    return false;
                }
                true
            })
            .collect()
    }

    fn write_with_parents(&self, path: &Path, content: &str) -> UnfurlResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }
        self.filesystem.write_file(path, content)
    }
}

fn scaffold_file(entry: &ScaffoldEntry, catalog: &ScaffoldCatalog) -> WrittenFile {
    WrittenFile {
        path: entry.path.to_string(),
        bytes: entry.size(),
        origin: FileOrigin::Scaffold {
            catalog: catalog.name.clone(),
        },
    }
}
