/// A `(path, content)` pair produced by one extraction rule.
///
/// Both fields are raw: the path still carries whatever markup surrounded it
/// and the content still carries surrounding whitespace. Normalization happens
/// at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: String,
    pub content: String,
    /// Name of the rule that produced this candidate.
    pub rule: &'static str,
}

impl Candidate {
    pub fn new(path: impl Into<String>, content: impl Into<String>, rule: &'static str) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rule,
        }
    }

    pub fn normalized_path(&self) -> String {
        normalize_path(&self.path)
    }
}

/// Strip the markup models wrap around file names.
///
/// Order matters and is fixed: whitespace, backticks, asterisks, heading
/// hashes, then whitespace once more.
pub fn normalize_path(raw: &str) -> String {
    raw.trim()
        .trim_matches('`')
        .trim_matches('*')
        .trim_matches('#')
        .trim()
        .to_string()
}
