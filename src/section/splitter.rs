//! Splits a flat document into keyed sections at its headings.

use std::collections::HashSet;

use super::key::{DEFAULT_KEY, title_to_key};
use super::registry::{Section, SectionRegistry};

/// Deepest heading level that opens a new section. Deeper headings stay in the body.
const MAX_SECTION_DEPTH: usize = 3;

/// Lines starting with this open or close a code block. Nothing inside one is a heading.
const CODE_FENCE: &str = "```";

/// A section whose key has not been assigned yet.
struct PendingSection {
    title: String,
    body: String,
    is_title_line: bool,
}

/// Parse a heading line into `(level, title)`.
///
/// A heading is 1 to [`MAX_SECTION_DEPTH`] `#` characters followed by a space.
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > MAX_SECTION_DEPTH {
        return None;
    }
    line[level..].strip_prefix(' ').map(|title| (level, title.trim()))
}

/// Split `text` into a registry of sections.
///
/// Every `#`, `##` and `###` heading closes the section being built and opens a new one whose
/// raw body starts with the heading line. The level-1 heading starting with `title_marker`
/// (the document's title line) always receives [`DEFAULT_KEY`]. Text before the first heading
/// belongs to no section and is dropped. Lines inside a fenced code block are body text.
pub fn split_sections(text: &str, title_marker: &str) -> SectionRegistry {
    let mut pending: Vec<PendingSection> = Vec::new();
    let mut preamble_lines = 0usize;
    let mut in_fence = false;

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);

        let heading = if in_fence { None } else { parse_heading(line) };
        if line.trim_start().starts_with(CODE_FENCE) {
            in_fence = !in_fence;
        }

        if let Some((level, title)) = heading {
            pending.push(PendingSection {
                title: title.to_string(),
                body: String::new(),
                is_title_line: level == 1
                    && !title_marker.is_empty()
                    && title.starts_with(title_marker),
            });
        }

        match pending.last_mut() {
            Some(current) => {
                current.body.push_str(line);
                current.body.push('\n');
            }
            None => preamble_lines += 1,
        }
    }

    if preamble_lines > 0 && !pending.is_empty() {
        tracing::debug!("Dropped {} line(s) before the first heading", preamble_lines);
    }

    assign_keys(pending)
}

/// Turn pending sections into a registry, resolving key collisions.
fn assign_keys(pending: Vec<PendingSection>) -> SectionRegistry {
    let title_line = pending.iter().position(|p| p.is_title_line);

    let mut used: HashSet<String> = HashSet::new();
    if title_line.is_some() {
        used.insert(DEFAULT_KEY.to_string());
    }

    let mut registry = SectionRegistry::new();
    for (idx, section) in pending.into_iter().enumerate() {
        let key = if Some(idx) == title_line {
            DEFAULT_KEY.to_string()
        } else {
            let base = title_to_key(&section.title);
            if base.is_empty() {
                tracing::debug!("Dropping section with unusable title {:?}", section.title);
                continue;
            }
            let key = unique_key(&base, &used);
            if key != base {
                tracing::debug!("Section '{}' renamed to '{}' (duplicate key)", base, key);
            }
            used.insert(key.clone());
            key
        };

        registry.insert(Section {
            key,
            title: section.title,
            raw_body: section.body,
        });
    }

    registry
}

fn unique_key(base: &str, used: &HashSet<String>) -> String {
    if !used.contains(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{}_{}", base, n))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}
