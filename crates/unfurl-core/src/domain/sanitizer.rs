//! Removal of reasoning blocks before any pattern matching runs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{entities::Document, error::DomainError};

static THINK_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("valid think-block pattern"));

/// Strips every span delimited by a matched pair of reasoning markers.
///
/// Matching is non-greedy and spans lines, so `<think>a</think>code<think>b</think>`
/// keeps `code`. A document without markers is returned unchanged.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    patterns: Vec<Regex>,
}

impl Sanitizer {
    /// Build a sanitizer for the given tag names (`"think"` removes
    /// `<think>` … `</think>`).
    pub fn for_tags<I, S>(tags: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = tags
            .into_iter()
            .map(|tag| {
                let tag = tag.as_ref().trim();
                if tag.is_empty() || tag.contains(['<', '>', '/']) {
                    return Err(DomainError::InvalidMarker(tag.to_string()));
                }
                let tag = regex::escape(tag);
                Regex::new(&format!(r"(?s)<{tag}>.*?</{tag}>"))
                    .map_err(|e| DomainError::InvalidMarker(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    pub fn sanitize(&self, document: &Document) -> Document {
        let mut text = document.as_str().to_string();
        for pattern in &self.patterns {
            if pattern.is_match(&text) {
                text = pattern.replace_all(&text, "").into_owned();
            }
        }
        Document::new(text)
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            patterns: vec![THINK_BLOCK.clone()],
        }
    }
}
