use std::collections::HashSet;

use crate::domain::{entities::common::ProjectPath, error::DomainError};

/// A conventional project file supplied when the document does not define it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldEntry {
    pub path: ProjectPath,
    /// Literal content, written verbatim.
    pub content: String,
}

impl ScaffoldEntry {
    pub fn try_new(path: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            path: ProjectPath::try_new(path)?,
            content: content.into(),
        })
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// A named, immutable set of scaffold entries for one target ecosystem.
///
/// Catalogues are data: swapping ecosystems means swapping catalogues, never
/// touching the extraction logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldCatalog {
    pub name: String,
    pub description: String,
    entries: Vec<ScaffoldEntry>,
    /// Hints printed after a successful run. `{dir}` expands to the output root.
    pub next_steps: Vec<String>,
}

impl ScaffoldCatalog {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            entries: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_entry(mut self, entry: ScaffoldEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn with_next_step(mut self, step: impl Into<String>) -> Self {
        self.next_steps.push(step.into());
        self
    }

    pub fn add_entry(&mut self, entry: ScaffoldEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &ScaffoldEntry> {
        self.entries.iter()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Next steps with `{dir}` replaced by `output_root`.
    pub fn render_next_steps(&self, output_root: &str) -> Vec<String> {
        self.next_steps
            .iter()
            .map(|step| step.replace("{dir}", output_root))
            .collect()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidCatalog(
                "catalogue name cannot be empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(DomainError::DuplicateScaffoldEntry {
                    catalog: self.name.clone(),
                    path: entry.path.to_string(),
                });
            }
        }

        Ok(())
    }
}
