//! Lightweight markup to HTML conversion.
//!
//! The dialect: `#`..`####` headings, `**bold**`, `*italic*`, `` `code` ``, fenced code blocks,
//! `>` quotes, `-`/`*` and `1.` list items, `---` rules, `$$centered$$` and `$inline$` math-like
//! spans and `[label](url)` links to http, https, mailto or relative targets. Anything that does
//! not match passes through as text.
//!
//! Conversion runs in three passes so no pattern ever sees the output of another:
//! 1. escape the source, then move code (fenced, then inline) into a stash behind placeholders
//! 2. classify lines into blocks and apply the inline patterns to block text
//! 3. put the stashed code back

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Opens a placeholder for stashed inline markup.
const INLINE_OPEN: char = '\u{E000}';
/// Opens a placeholder for a stashed block that must stand on its own line.
const BLOCK_OPEN: char = '\u{E002}';
/// Closes either placeholder.
const CLOSE: char = '\u{E001}';

static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[^`\n]*\n?(.*?)```").expect("valid fenced code regex"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("valid inline code regex"));
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{E000}\x{E002}](\d+)\x{E001}").expect("valid placeholder regex")
});

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("valid italic regex"));
static CENTERED_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\$([^$]+)\$\$").expect("valid centered math regex"));
static INLINE_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([^$]+)\$").expect("valid inline math regex"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| {
        Regex::new(r"\[([^\]]+)\]\(((?:[^()\s]|\([^()\s]*\))+)\)").expect("valid link regex")
    });
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. (.+)$").expect("valid ordered item regex"));

/// Escapes text for inclusion in HTML element content or attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            INLINE_OPEN | BLOCK_OPEN | CLOSE => {}
            _ => out.push(c),
        }
    }
    out
}

/// URL schemes allowed in a link target. Targets without a scheme are relative.
const LINK_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Whether `url` may become an `href`. Any scheme outside [`LINK_SCHEMES`] is refused,
/// as are control characters that browsers strip before reading the scheme.
fn is_safe_link(url: &str) -> bool {
    if url.chars().any(char::is_control) {
        return false;
    }
    match url.find([':', '/', '?', '#']) {
        Some(idx) if url[idx..].starts_with(':') => {
            let scheme = &url[..idx];
            LINK_SCHEMES.iter().any(|allowed| scheme.eq_ignore_ascii_case(allowed))
        }
        _ => true,
    }
}

/// Markup moved out of the text so later patterns cannot touch it.
#[derive(Default)]
struct Stash {
    items: Vec<String>,
}

impl Stash {
    fn push(&mut self, html: String, open: char) -> String {
        let token = format!("{}{}{}", open, self.items.len(), CLOSE);
        self.items.push(html);
        token
    }

    fn restore(&self, text: &str) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|idx| self.items.get(idx))
                    .map_or_else(|| caps[0].to_string(), Clone::clone)
            })
            .into_owned()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Block {
    Heading(usize, String),
    Rule,
    Quote(Vec<String>),
    List { ordered: bool, items: Vec<String> },
    Math(String),
    Stashed(String),
    Paragraph(Vec<String>),
}

/// What a single source line contributes.
enum Line<'a> {
    Blank,
    Heading(usize, &'a str),
    Rule,
    Quote(&'a str),
    Item { ordered: bool, text: &'a str },
    Math(&'a str),
    Stashed(&'a str),
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with(BLOCK_OPEN) {
        return Line::Stashed(trimmed);
    }

    let hashes = line.chars().take_while(|&c| c == '#').count();
    if (1..=4).contains(&hashes)
        && let Some(text) = line[hashes..].strip_prefix(' ')
        && !text.trim().is_empty()
    {
        return Line::Heading(hashes, text.trim());
    }

    let rule = line.trim_end();
    if rule.len() >= 3 && rule.chars().all(|c| c == '-') {
        return Line::Rule;
    }

    if let Some(text) = line.strip_prefix("&gt; ")
        && !text.trim().is_empty()
    {
        return Line::Quote(text);
    }

    if let Some(text) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
        && !text.trim().is_empty()
    {
        return Line::Item {
            ordered: false,
            text,
        };
    }

    if let Some(caps) = ORDERED_ITEM.captures(line)
        && let Some(text) = caps.get(1)
    {
        return Line::Item {
            ordered: true,
            text: text.as_str(),
        };
    }

    if let Some(inner) = trimmed
        .strip_prefix("$$")
        .and_then(|rest| rest.strip_suffix("$$"))
        && !inner.trim().is_empty()
        && !inner.contains('$')
    {
        return Line::Math(inner.trim());
    }

    Line::Text(line)
}

/// Add `line` to `block` when it continues it. Returns the line back when it does not.
fn extend_block<'a>(block: Option<&mut Block>, line: Line<'a>) -> Option<Line<'a>> {
    match (block, line) {
        (Some(Block::Paragraph(lines)), Line::Text(text))
        | (Some(Block::Quote(lines)), Line::Quote(text)) => {
            lines.push(text.to_string());
            None
        }
        (Some(Block::List { ordered: open, items }), Line::Item { ordered, text })
            if *open == ordered =>
        {
            items.push(text.to_string());
            None
        }
        (_, line) => Some(line),
    }
}

fn open_block(line: Line<'_>) -> Option<Block> {
    Some(match line {
        Line::Blank => return None,
        Line::Heading(level, text) => Block::Heading(level, text.to_string()),
        Line::Rule => Block::Rule,
        Line::Quote(text) => Block::Quote(vec![text.to_string()]),
        Line::Item { ordered, text } => Block::List {
            ordered,
            items: vec![text.to_string()],
        },
        Line::Math(text) => Block::Math(text.to_string()),
        Line::Stashed(token) => Block::Stashed(token.to_string()),
        Line::Text(text) => Block::Paragraph(vec![text.to_string()]),
    })
}

/// Group lines into blocks. Consecutive quote lines, list items of the same kind and text lines
/// share one block; a blank line ends every open block.
fn collect_blocks(text: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    let mut extendable = false;

    for line in text.lines() {
        let line = classify(line);
        if matches!(line, Line::Blank) {
            extendable = false;
            continue;
        }

        let last = if extendable { blocks.last_mut() } else { None };
        if let Some(line) = extend_block(last, line)
            && let Some(block) = open_block(line)
        {
            blocks.push(block);
        }
        extendable = true;
    }

    blocks
}

/// Apply the inline patterns, in order, to a run of block text.
fn render_inline(text: &str) -> String {
    let text = BOLD.replace_all(text, "<strong>${1}</strong>");
    let text = ITALIC.replace_all(&text, "<em>${1}</em>");
    let text = CENTERED_MATH.replace_all(&text, r#"<span class="math-block">${1}</span>"#);
    let text = INLINE_MATH.replace_all(&text, r#"<span class="math">${1}</span>"#);
    LINK.replace_all(&text, |caps: &Captures<'_>| {
        if is_safe_link(&caps[2]) {
            format!(r#"<a href="{}">{}</a>"#, &caps[2], &caps[1])
        } else {
            caps[0].to_string()
        }
    })
    .into_owned()
}

fn render_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| render_inline(line.trim()))
        .collect::<Vec<_>>()
        .join("<br>")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading(level, text) => format!("<h{0}>{1}</h{0}>", level, render_inline(text)),
        Block::Rule => "<hr>".to_string(),
        Block::Quote(lines) => format!("<blockquote>{}</blockquote>", render_lines(lines)),
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", render_inline(item.trim())))
                .collect();
            format!("<{0}>{1}</{0}>", tag, items)
        }
        Block::Math(text) => format!(r#"<div class="math-block">{}</div>"#, text),
        Block::Stashed(token) => token.clone(),
        Block::Paragraph(lines) => format!("<p>{}</p>", render_lines(lines)),
    }
}

/// Render a raw section body into an HTML fragment (no document shell).
pub fn render_body(raw: &str) -> String {
    let escaped = escape_html(raw);
    let mut stash = Stash::default();

    let text = FENCED_CODE.replace_all(&escaped, |caps: &Captures<'_>| {
        let code = caps[1].trim_end_matches('\n');
        let token = stash.push(format!("<pre><code>{}</code></pre>", code), BLOCK_OPEN);
        format!("\n{}\n", token)
    });
    let text = INLINE_CODE.replace_all(&text, |caps: &Captures<'_>| {
        stash.push(format!("<code>{}</code>", &caps[1]), INLINE_OPEN)
    });

    let html = collect_blocks(&text)
        .iter()
        .map(render_block)
        .filter(|html| !html.is_empty() && html != "<p></p>")
        .collect::<Vec<_>>()
        .join("\n");

    stash.restore(&html)
}
