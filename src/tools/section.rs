//! Section navigation handlers: open, back, home and clearing the highlight.

use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

use crate::engine::{DocEngine, RenderedContent, Resolution};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct OpenSectionRequest {
    /// Section key, e.g. `settings_and_configuration`
    #[serde(default)]
    pub key: Option<String>,
    /// Section title, resolved to a key the same way the documentation's headings are
    #[serde(default)]
    pub title: Option<String>,
}

/// Open a section by key or title. A key wins when both are given.
pub fn handle_open_section(
    engine: &mut DocEngine,
    request: OpenSectionRequest,
) -> Result<String, String> {
    let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

    let key = match (non_blank(request.key), non_blank(request.title)) {
        (Some(key), _) => key.trim().to_string(),
        (None, Some(title)) => engine.title_to_key(&title),
        (None, None) => return Err("Provide either a section key or a section title.".to_string()),
    };

    Ok(format_content(&engine.load_section(&key)))
}

/// Go back one step in the history.
pub fn handle_go_back(engine: &mut DocEngine) -> Result<String, String> {
    engine
        .back()
        .map(|content| format_content(&content))
        .ok_or_else(|| "Already at the first visited section; there is nothing to go back to.".to_string())
}

/// Open the default section.
pub fn handle_go_home(engine: &mut DocEngine) -> String {
    format_content(&engine.home())
}

/// Forget the active search term and show the current section without highlights.
pub fn handle_clear_search(engine: &mut DocEngine) -> String {
    format_content(&engine.clear_search())
}

/// Header lines describing the shown section, followed by its display document.
pub fn format_content(content: &RenderedContent) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", content.breadcrumb);
    let _ = writeln!(out, "Section: {}", content.key);

    match content.resolution {
        Resolution::Exact => {}
        Resolution::DefaultFallback => {
            let _ = writeln!(out, "Note: requested section not found, showing the default section.");
        }
        Resolution::NotFound => {
            let _ = writeln!(out, "Note: no matching section and no default section available.");
        }
    }

    let _ = writeln!(
        out,
        "Back: {}",
        if content.can_go_back { "available" } else { "unavailable" }
    );
    let _ = write!(out, "\n{}", content.markup);
    out
}
