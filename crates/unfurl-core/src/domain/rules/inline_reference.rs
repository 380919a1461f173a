use once_cell::sync::Lazy;
use regex::Regex;

use super::{ExtractionRule, FENCED_BODY, extension_alternation, path_and_body};
use crate::domain::entities::{Candidate, Document};

static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?is)`([^`]+\.(?:{exts}))`[^\n]*\n{FENCED_BODY}",
        exts = extension_alternation(),
    ))
    .expect("valid inline-reference pattern")
});

/// A path inside an inline code span, anything else on that line ignored,
/// followed by a fenced block on the next line.
///
/// Matches generic markdown, so it has the lowest priority.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineReferenceRule;

impl ExtractionRule for InlineReferenceRule {
    fn name(&self) -> &'static str {
        "inline-reference"
    }

    fn extract(&self, document: &Document) -> Vec<Candidate> {
        path_and_body(&PATTERN, document, self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<Candidate> {
        InlineReferenceRule.extract(&Document::new(text))
    }

    #[test]
    fn inline_code_span_then_fence() {
        let found = extract("Create `types/index.ts` with:\n```typescript\nexport type Id = string;\n```");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "types/index.ts");
        assert_eq!(found[0].content, "export type Id = string;\n");
    }

    #[test]
    fn rest_of_line_is_ignored() {
        let found = extract("1. `lib/store.js` (state, persisted) :\n```js\nexport {}\n```");
        assert_eq!(found[0].path, "lib/store.js");
    }

    #[test]
    fn mentions_without_fence_are_ignored() {
        assert!(extract("Edit `app/page.tsx` later.\nThen restart.").is_empty());
    }

    #[test]
    fn several_references() {
        let text = "`a.css`\n```css\nA\n```\nand `b.mjs`:\n```\nB\n```";
        let paths: Vec<_> = extract(text).into_iter().map(|c| c.path).collect();
        assert_eq!(paths, vec!["a.css", "b.mjs"]);
    }
}
