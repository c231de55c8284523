//! Topic buckets used to group search results.

use serde::Serialize;
use std::fmt;

/// Presentation bucket derived from a section key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Getting Started")]
    GettingStarted,
    Features,
    Configuration,
    Support,
    General,
}

/// Key fragments per bucket, tested in order; the first bucket with a matching fragment wins.
const BUCKETS: &[(Category, &[&str])] = &[
    (Category::GettingStarted, &["getting", "welcome", "installation"]),
    (Category::Features, &["conversion", "batch", "security"]),
    (Category::Configuration, &["settings", "preferences"]),
    (Category::Support, &["troubleshooting", "support", "faq"]),
];

impl Category {
    /// Bucket for a section key, by substring membership.
    pub fn for_key(key: &str) -> Self {
        BUCKETS
            .iter()
            .find(|(_, fragments)| fragments.iter().any(|fragment| key.contains(fragment)))
            .map_or(Self::General, |(category, _)| *category)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::GettingStarted => "Getting Started",
            Self::Features => "Features",
            Self::Configuration => "Configuration",
            Self::Support => "Support",
            Self::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("welcome", Category::GettingStarted)]
    #[case("getting_started", Category::GettingStarted)]
    #[case("document_conversion", Category::Features)]
    #[case("security_features", Category::Features)]
    #[case("settings_and_configuration", Category::Configuration)]
    #[case("troubleshooting_and_support", Category::Support)]
    #[case("file_history", Category::General)]
    #[case("", Category::General)]
    fn test_category_for_key(#[case] key: &str, #[case] expected: Category) {
        check!(Category::for_key(key) == expected);
    }

    #[test]
    fn test_first_bucket_wins() {
        check!(Category::for_key("welcome_settings") == Category::GettingStarted);
    }

    #[test]
    fn test_serializes_as_label() {
        check!(serde_json::to_string(&Category::GettingStarted).ok() == Some("\"Getting Started\"".to_string()));
        check!(Category::Support.to_string() == "Support");
    }
}
