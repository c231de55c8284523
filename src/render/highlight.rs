//! Search-term highlighting over rendered markup.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Shortest search token that gets highlighted.
const MIN_HIGHLIGHT_LEN: usize = 3;

/// Tags and character entities: highlighting never rewrites inside these.
static PROTECTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>|&#?[A-Za-z0-9]+;").expect("valid protected-span regex"));

/// Builds a case-insensitive whole-word matcher for one search token.
fn word_matcher(token: &str) -> Option<Regex> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(token)))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Wrap whole-word occurrences of every search token (longer than two characters) in `<mark>`.
///
/// Only text between tags is touched, so attribute values and tag names stay intact.
pub fn highlight(markup: &str, search_term: &str) -> String {
    let mut tokens: Vec<String> = Vec::new();
    for token in search_term.split_whitespace().map(str::to_lowercase) {
        if token.chars().count() >= MIN_HIGHLIGHT_LEN && !tokens.contains(&token) {
            tokens.push(token);
        }
    }

    let mut current = markup.to_string();
    for matcher in tokens.iter().filter_map(|token| word_matcher(token)) {
        current = mark_text(&current, &matcher);
    }
    current
}

/// One token's pass. Text between protected spans is rewritten; the spans themselves,
/// including `<mark>` tags from earlier passes, are copied as-is.
fn mark_text(markup: &str, matcher: &Regex) -> String {
    let mut out = String::with_capacity(markup.len() + 32);
    let mut last = 0;
    for span in PROTECTED.find_iter(markup) {
        out.push_str(&matcher.replace_all(&markup[last..span.start()], "<mark>${0}</mark>"));
        out.push_str(span.as_str());
        last = span.end();
    }
    out.push_str(&matcher.replace_all(&markup[last..], "<mark>${0}</mark>"));
    out
}
