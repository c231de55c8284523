//! Documentation search handler.

use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

use crate::engine::DocEngine;
use crate::search::SearchResponse;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchDocsRequest {
    /// Words to look for; words shorter than three characters are ignored
    pub query: String,
    /// Return the grouped results as JSON instead of text (default: false)
    #[serde(default)]
    pub json: bool,
}

/// Run a search. Blank queries are rejected here; the engine expects trimmed, non-empty input.
pub fn handle_search_docs(
    engine: &mut DocEngine,
    request: SearchDocsRequest,
) -> Result<String, String> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err("Search query is empty. Enter one or more words to search for.".to_string());
    }

    let response = engine.search(query);
    if request.json {
        return serde_json::to_string_pretty(&response)
            .map_err(|e| format!("Failed to serialize search results: {}", e));
    }
    Ok(format_search_response(&response))
}

/// Render a search response as plain text, grouped by category.
pub fn format_search_response(response: &SearchResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", response.header);
    let _ = writeln!(out, "{}", response.count_label());

    if let Some(message) = &response.message {
        let _ = write!(out, "\n{}\n", message);
        return out;
    }

    for group in &response.groups {
        let _ = write!(out, "\n## {}\n", group.category);
        for result in &group.results {
            let _ = writeln!(out, "• {} [{}]", result.section_title, result.section_key);
            let _ = writeln!(out, "  {}", result.excerpt);
        }
    }
    out
}
