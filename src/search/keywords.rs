//! Hand-curated boost keywords per section key.

use ahash::{AHashMap, AHashSet};

const BUILTIN: &[(&str, &[&str])] = &[
    ("welcome", &["welcome", "introduction", "overview", "start", "beginning"]),
    ("getting_started", &["start", "begin", "installation", "setup", "first", "quick"]),
    ("file_conversion", &["convert", "file", "format", "transform", "change", "export"]),
    ("batch_processing", &["batch", "multiple", "bulk", "mass", "many", "group"]),
    ("security_features", &["security", "safe", "protection", "encryption", "secure"]),
    ("settings", &["settings", "preferences", "configuration", "options", "customize"]),
    (
        "troubleshooting_and_support",
        &["help", "problem", "issue", "error", "support", "fix", "trouble"],
    ),
];

/// Section key to boost terms. Matching a term adds fixed weight; nothing else is indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordIndex {
    terms: AHashMap<String, AHashSet<String>>,
}

impl Default for KeywordIndex {
    fn default() -> Self {
        let mut index = Self::empty();
        for (key, terms) in BUILTIN {
            index.extend(key, terms.iter().copied());
        }
        index
    }
}

impl KeywordIndex {
    /// An index with no boost terms at all.
    pub fn empty() -> Self {
        Self {
            terms: AHashMap::new(),
        }
    }

    /// Add boost terms for `key`. Terms are stored lowercased; blank terms are skipped.
    pub fn extend<'a>(&mut self, key: &str, terms: impl IntoIterator<Item = &'a str>) {
        let entry = self.terms.entry(key.to_string()).or_default();
        entry.extend(
            terms
                .into_iter()
                .map(|term| term.trim().to_lowercase())
                .filter(|term| !term.is_empty()),
        );
    }

    /// Whether `token` (already lowercased) is a boost term of section `key`.
    pub fn is_boosted(&self, key: &str, token: &str) -> bool {
        self.terms.get(key).is_some_and(|terms| terms.contains(token))
    }

    /// Number of section keys carrying boost terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("welcome", "overview", true)]
    #[case("settings", "preferences", true)]
    #[case("troubleshooting_and_support", "fix", true)]
    #[case("settings", "overview", false)]
    #[case("unknown_section", "help", false)]
    fn test_builtin_terms(#[case] key: &str, #[case] token: &str, #[case] expected: bool) {
        check!(KeywordIndex::default().is_boosted(key, token) == expected);
    }

    #[test]
    fn test_extend_normalizes_terms() {
        let mut index = KeywordIndex::empty();
        index.extend("file_history", [" Records ", "", "LOG"]);
        check!(index.is_boosted("file_history", "records"));
        check!(index.is_boosted("file_history", "log"));
        check!(!index.is_boosted("file_history", ""));
        check!(index.len() == 1);
    }

    #[test]
    fn test_extend_keeps_existing_terms() {
        let mut index = KeywordIndex::default();
        index.extend("settings", ["theme"]);
        check!(index.is_boosted("settings", "theme"));
        check!(index.is_boosted("settings", "options"));
    }
}
