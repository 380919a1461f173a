use once_cell::sync::Lazy;
use regex::Regex;

use super::{ExtractionRule, FENCED_BODY, path_and_body};
use crate::domain::entities::{Candidate, Document};

static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?is)// ===\s*FILE:\s*([^\s=]+)\s*===\s*\n{FENCED_BODY}"
    ))
    .expect("valid fenced-marker pattern")
});

/// `// === FILE: path ===` immediately followed by a fenced block.
///
/// The least ambiguous convention, so it runs first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FencedMarkerRule;

impl ExtractionRule for FencedMarkerRule {
    fn name(&self) -> &'static str {
        "fenced-marker"
    }

    fn extract(&self, document: &Document) -> Vec<Candidate> {
        path_and_body(&PATTERN, document, self.name())
    }
}
