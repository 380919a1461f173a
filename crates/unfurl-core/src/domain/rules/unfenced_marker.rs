use once_cell::sync::Lazy;
use regex::Regex;

use super::ExtractionRule;
use crate::domain::entities::{Candidate, Document};

static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)// ===\s*FILE:\s*([^\s=]+)\s*===\s*\n").expect("valid marker header pattern")
});

static TERMINATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)// ===\s*(?:FILE:|END)").expect("valid marker terminator pattern")
});

/// `// === FILE: path ===` followed by raw text.
///
/// Content runs to the next `// === FILE:` or `// === END` marker, or to the
/// end of the document. The terminator is not consumed, so it can open the
/// next file.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnfencedMarkerRule;

impl ExtractionRule for UnfencedMarkerRule {
    fn name(&self) -> &'static str {
        "unfenced-marker"
    }

    fn extract(&self, document: &Document) -> Vec<Candidate> {
        let text = document.as_str();
        let mut candidates = Vec::new();
        let mut pos = 0;

        while let Some(caps) = HEADER.captures_at(text, pos) {
            let (Some(header), Some(path)) = (caps.get(0), caps.get(1)) else {
                break;
            };
            let body_start = header.end();
            let body_end = TERMINATOR
                .find_at(text, body_start)
                .map_or(text.len(), |m| m.start());

            candidates.push(Candidate::new(
                path.as_str(),
                &text[body_start..body_end],
                self.name(),
            ));
            pos = body_end;
        }

        candidates
    }
}
