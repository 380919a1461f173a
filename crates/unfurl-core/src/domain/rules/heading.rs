use once_cell::sync::Lazy;
use regex::Regex;

use super::{ExtractionRule, FENCED_BODY, extension_alternation, path_and_body};
use crate::domain::entities::{Candidate, Document};

static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?is)(?:###|\*\*)\s*([^\s*#]+\.(?:{exts}))\s*(?:\*\*)?\s*\n{FENCED_BODY}",
        exts = extension_alternation(),
    ))
    .expect("valid heading pattern")
});

/// A `### path` heading or `**path**` emphasis line naming a file with a
/// recognised extension, followed by a fenced block.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingRule;

impl ExtractionRule for HeadingRule {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn extract(&self, document: &Document) -> Vec<Candidate> {
        path_and_body(&PATTERN, document, self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<Candidate> {
        HeadingRule.extract(&Document::new(text))
    }

    #[test]
    fn heading_style() {
        let found = extract("### components/ui/Button.tsx\n```tsx\nexport const B = 1;\n```");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "components/ui/Button.tsx");
        assert_eq!(found[0].content, "export const B = 1;\n");
    }

    #[test]
    fn emphasis_style() {
        let found = extract("**app/globals.css**\n```css\nbody { margin: 0; }\n```");
        assert_eq!(found[0].path, "app/globals.css");
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(extract("### README.JSON\n```\n{}\n```").len(), 1);
    }

    #[test]
    fn unrecognised_extension_is_ignored() {
        assert!(extract("### notes.md\n```\ntext\n```").is_empty());
        assert!(extract("### main.rs\n```rust\nfn main() {}\n```").is_empty());
    }

    #[test]
    fn requires_fence_on_next_line() {
        assert!(extract("### app/page.tsx\nSome prose first.\n```tsx\nx\n```").is_empty());
    }
}
