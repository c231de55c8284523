//! Title to section-key mapping.
//!
//! Keys are stable, lower-case, underscore-joined identifiers. A small table pins the keys of
//! the documentation's canonical topics; every other title is slugified. Titles added to the
//! documentation later either get an entry here or accept the slug.

/// Key of the default ("welcome") section every lookup miss falls back to.
pub const DEFAULT_KEY: &str = "welcome";

/// Hand-chosen keys for the canonical topic titles. Matched exactly (case-sensitive).
const CANONICAL_KEYS: &[(&str, &str)] = &[
    ("Welcome", DEFAULT_KEY),
    ("Quick Start", "quick_start"),
    ("Key Features", "key_features"),
    ("Document Conversion", "document_conversion"),
    ("Image Conversion", "image_conversion"),
    ("Archive Management", "archive_management"),
    ("Settings and Configuration", "settings_and_configuration"),
    ("File History", "file_history"),
];

/// Map a section title to its key.
///
/// Returns an empty string for titles with no usable characters; the empty key is never a
/// valid registry key.
///
/// Underscores survive slugification, so a key is a fixed point:
/// `title_to_key(&title_to_key(t)) == title_to_key(t)`.
pub fn title_to_key(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        return String::new();
    }

    if let Some((_, key)) = CANONICAL_KEYS.iter().find(|(canonical, _)| *canonical == title) {
        return (*key).to_string();
    }

    slugify(title)
}

/// Lower-case, drop everything but ASCII letters, ASCII digits, underscores and whitespace, then
/// join the remaining words with single underscores.
fn slugify(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("_")
}
