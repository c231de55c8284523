//! Result previews cut from searchable text.

/// Characters kept on each side of the matched token.
const CONTEXT_CHARS: usize = 50;

/// Length of the preview when no token occurs in the text.
const FALLBACK_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// Char index of the first case-insensitive occurrence of `needle` in `haystack`.
fn find_ignore_case(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&start| {
        haystack[start..start + needle.len()]
            .iter()
            .zip(needle)
            .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
    })
}

/// Window of text around the first token (in query order) that occurs in `text`.
///
/// Ellipses mark the sides where the window was cut short. When no token occurs, the first
/// hundred characters are used instead.
pub fn extract_excerpt(text: &str, tokens: &[String]) -> String {
    let chars: Vec<char> = text.chars().collect();

    for token in tokens {
        let needle: Vec<char> = token.chars().collect();
        if let Some(index) = find_ignore_case(&chars, &needle) {
            let start = index.saturating_sub(CONTEXT_CHARS);
            let end = (index + needle.len() + CONTEXT_CHARS).min(chars.len());
            let window: String = chars[start..end].iter().collect();

            let mut excerpt = String::with_capacity(window.len() + 2 * ELLIPSIS.len());
            if start > 0 {
                excerpt.push_str(ELLIPSIS);
            }
            excerpt.push_str(window.trim());
            if end < chars.len() {
                excerpt.push_str(ELLIPSIS);
            }
            return excerpt;
        }
    }

    if chars.len() > FALLBACK_CHARS {
        let mut excerpt: String = chars[..FALLBACK_CHARS].iter().collect();
        excerpt.push_str(ELLIPSIS);
        excerpt
    } else {
        text.to_string()
    }
}
