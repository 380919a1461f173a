//! The pattern matcher chain.
//!
//! Each [`ExtractionRule`] recognises one file-boundary convention and scans
//! the whole document independently. [`RuleChain`] runs them in a fixed
//! priority order and concatenates their candidates; precedence between rules
//! is enforced later by [`FileRegistry`](crate::domain::FileRegistry)'s
//! first-match-wins registration.
//!
//! | Rank | Rule                    | Convention                                   |
//! |------|-------------------------|----------------------------------------------|
//! | 1    | [`FencedMarkerRule`]    | `// === FILE: p ===` + fenced block          |
//! | 2    | [`UnfencedMarkerRule`]  | `// === FILE: p ===` + text to next marker   |
//! | 3    | [`HeadingRule`]         | `### p` or `**p**` + fenced block            |
//! | 4    | [`InlineReferenceRule`] | `` `p` `` on a line + fenced block           |
//!
//! New conventions are added by appending a rule with [`RuleChain::with_rule`].

use std::fmt;

use regex::Regex;
use tracing::debug;

use crate::domain::entities::{Candidate, Document};

mod fenced_marker;
mod heading;
mod inline_reference;
mod unfenced_marker;

pub use fenced_marker::FencedMarkerRule;
pub use heading::HeadingRule;
pub use inline_reference::InlineReferenceRule;
pub use unfenced_marker::UnfencedMarkerRule;

/// Extensions that rules 3 and 4 accept as file names.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "css", "json", "mjs"];

/// Opening fence with an ignored language tag, then the lazily matched interior
/// (capture group) up to the closing fence.
pub(crate) const FENCED_BODY: &str = r"```[\w+.#-]*\s*\n(.*?)```";

pub(crate) fn extension_alternation() -> String {
    RECOGNIZED_EXTENSIONS.join("|")
}

/// One file-boundary heuristic.
pub trait ExtractionRule: Send + Sync {
    /// Stable identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// All candidates in document order, non-overlapping. No match is an
    /// empty vector, never an error.
    fn extract(&self, document: &Document) -> Vec<Candidate>;
}

/// Candidates from a pattern whose group 1 is the path and group 2 the content.
pub(crate) fn path_and_body(pattern: &Regex, document: &Document, rule: &'static str) -> Vec<Candidate> {
    pattern
        .captures_iter(document.as_str())
        .filter_map(|caps| {
            let path = caps.get(1)?.as_str();
            let body = caps.get(2)?.as_str();
            Some(Candidate::new(path, body, rule))
        })
        .collect()
}

/// Ordered list of extraction rules.
pub struct RuleChain {
    rules: Vec<Box<dyn ExtractionRule>>,
}

impl RuleChain {
    /// A chain with no rules; extracts nothing.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The four built-in conventions in priority order.
    pub fn standard() -> Self {
        Self::empty()
            .with_rule(FencedMarkerRule)
            .with_rule(UnfencedMarkerRule)
            .with_rule(HeadingRule)
            .with_rule(InlineReferenceRule)
    }

    /// Append a rule with the lowest priority so far.
    pub fn with_rule(mut self, rule: impl ExtractionRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over the same document, in priority order.
    pub fn extract(&self, document: &Document) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        for rule in &self.rules {
            let found = rule.extract(document);
            debug!(rule = rule.name(), candidates = found.len(), "Rule applied");
            candidates.extend(found);
        }
        candidates
    }
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleChain")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl ExtractionRule for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn extract(&self, _document: &Document) -> Vec<Candidate> {
            vec![Candidate::new("fixed.txt", "x", "fixed")]
        }
    }

    #[test]
    fn standard_order() {
        assert_eq!(
            RuleChain::standard().rule_names(),
            vec![
                "fenced-marker",
                "unfenced-marker",
                "heading",
                "inline-reference"
            ]
        );
    }

    #[test]
    fn appended_rule_runs_last() {
        let chain = RuleChain::standard().with_rule(Fixed);
        let doc = Document::new("// === FILE: a.ts ===\n```ts\nA\n```\n");

        let candidates = chain.extract(&doc);
        assert_eq!(candidates.first().unwrap().rule, "fenced-marker");
        assert_eq!(candidates.last().unwrap().rule, "fixed");
    }

    #[test]
    fn empty_chain_extracts_nothing() {
        let doc = Document::new("// === FILE: a.ts ===\nA");
        assert!(RuleChain::empty().extract(&doc).is_empty());
    }

    #[test]
    fn plain_prose_extracts_nothing() {
        let doc = Document::new("Here is an overview of the architecture.\nNo files.");
        assert!(RuleChain::standard().extract(&doc).is_empty());
    }

    #[test]
    fn every_rule_sees_the_full_document() {
        // Rule 1 and rule 2 both match the same header.
        let doc = Document::new("// === FILE: a.ts ===\n```ts\nA\n```\n");
        let rules: Vec<_> = RuleChain::standard()
            .extract(&doc)
            .into_iter()
            .map(|c| c.rule)
            .collect();

        assert_eq!(rules, vec!["fenced-marker", "unfenced-marker"]);
    }
}
