use std::collections::HashSet;

use tracing::debug;

use crate::domain::{
    entities::{candidate::Candidate, common::ProjectPath},
    error::DomainError,
};

/// A finalized registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: ProjectPath,
    /// Content with surrounding whitespace trimmed.
    pub content: String,
    /// Name of the rule that produced the winning candidate.
    pub rule: &'static str,
}

impl FileRecord {
    /// Byte length of the stored content.
    pub fn size(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Accumulates extracted files with first-match-wins uniqueness.
///
/// Records are kept in insertion order and never updated once inserted.
/// The registry is local to one extraction run.
#[derive(Debug, Clone, Default)]
pub struct FileRegistry {
    records: Vec<FileRecord>,
    seen: HashSet<String>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate.
    ///
    /// - `Ok(true)`: stored.
    /// - `Ok(false)`: the path is blank or its canonical form is already
    ///   registered.
    /// - `Err(DomainError::UnsafePath)`: the path would escape the output
    ///   root. Nothing is stored and the path stays free.
    pub fn register(&mut self, candidate: Candidate) -> Result<bool, DomainError> {
        let path = match ProjectPath::try_new(candidate.normalized_path()) {
            Ok(path) => path,
            Err(DomainError::EmptyPath) => {
                debug!(rule = candidate.rule, "Discarding candidate with blank path");
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        if self.seen.contains(path.as_str()) {
            debug!(
                rule = candidate.rule,
                path = %path,
                "Discarding duplicate candidate"
            );
            return Ok(false);
        }

        self.seen.insert(path.as_str().to_string());
        self.records.push(FileRecord {
            path,
            content: candidate.content.trim().to_string(),
            rule: candidate.rule,
        });

        Ok(true)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.seen.contains(path)
    }

    pub fn get(&self, path: &str) -> Option<&FileRecord> {
        self.records.iter().find(|r| r.path.as_str() == path)
    }

    pub fn records(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter()
    }

    /// Canonical paths of every registered record.
    pub fn paths(&self) -> HashSet<String> {
        self.seen.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_trimmed_content() {
        let mut registry = FileRegistry::new();
        let inserted = registry
            .register(Candidate::new("app/page.tsx", "\n\n  body  \n", "fenced-marker"))
            .unwrap();

        assert!(inserted);
        let record = registry.get("app/page.tsx").unwrap();
        assert_eq!(record.content, "body");
        assert_eq!(record.size(), 4);
        assert_eq!(record.rule, "fenced-marker");
    }

    #[test]
    fn first_match_wins() {
        let mut registry = FileRegistry::new();
        assert!(registry.register(Candidate::new("a.ts", "first", "r1")).unwrap());
        assert!(!registry.register(Candidate::new("`a.ts`", "second", "r2")).unwrap());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a.ts").unwrap().content, "first");
    }

    #[test]
    fn current_dir_alias_is_a_duplicate() {
        let mut registry = FileRegistry::new();
        assert!(registry.register(Candidate::new("a.ts", "first", "r1")).unwrap());
        assert!(!registry.register(Candidate::new("./a.ts", "second", "r2")).unwrap());

        let mut reversed = FileRegistry::new();
        assert!(reversed.register(Candidate::new("./a.ts", "first", "r1")).unwrap());
        assert!(!reversed.register(Candidate::new("`a.ts`", "second", "r2")).unwrap());
        assert_eq!(reversed.get("a.ts").unwrap().content, "first");
        assert_eq!(reversed.len(), 1);
    }

    #[test]
    fn blank_path_is_skipped_not_error() {
        let mut registry = FileRegistry::new();
        assert!(!registry.register(Candidate::new("**", "x", "r")).unwrap());
        assert!(registry.is_empty());
    }

    #[test]
    fn unsafe_path_is_rejected_and_stays_free() {
        let mut registry = FileRegistry::new();
        let err = registry
            .register(Candidate::new("../escape.ts", "x", "r"))
            .unwrap_err();

        assert!(matches!(err, DomainError::UnsafePath { .. }));
        assert!(!registry.contains("../escape.ts"));
        assert!(registry.is_empty());
    }

    #[test]
    fn preserves_insertion_order() {
        let mut registry = FileRegistry::new();
        for name in ["c.ts", "a.ts", "b.ts"] {
            registry.register(Candidate::new(name, "x", "r")).unwrap();
        }

        let order: Vec<_> = registry.records().map(|r| r.path.as_str()).collect();
        assert_eq!(order, vec!["c.ts", "a.ts", "b.ts"]);
    }
}
