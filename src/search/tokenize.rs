//! Query tokenization and search-text preparation.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum token length that contributes to scoring. Excerpts use every token.
pub(crate) const MIN_TOKEN_LENGTH: usize = 3;

/// Ordered cleanup passes producing searchable text; each pattern maps to its replacement.
static CLEANUP: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?m)^#{1,6}[ \t]+.*$", ""),
        (r"(?s)```.*?```", ""),
        (r"`[^`]+`", ""),
        (r"<[^>]*>", ""),
        (r"https?://\S+", ""),
        (r"[{}\[\]()<>]", " "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("valid search cleanup regex"),
            replacement,
        )
    })
    .collect()
});

/// Lowercased whitespace-separated query tokens, keeping only those long enough to score.
pub fn query_tokens(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| token.chars().count() >= MIN_TOKEN_LENGTH)
        .collect()
}

/// Every lowercased whitespace-separated query token, short ones included, in query order.
/// Excerpts are centred on the first of these found in the text.
pub fn excerpt_tokens(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Strip headings, code, tags, URLs and bracket characters from a raw body, then collapse
/// whitespace. The result is only ever scored and excerpted, never displayed.
pub fn searchable_text(raw_body: &str) -> String {
    let mut text = raw_body.to_string();
    for (pattern, replacement) in CLEANUP.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
