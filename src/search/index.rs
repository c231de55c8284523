//! Query evaluation over a section registry.
//!
//! Nothing is persisted between queries: every search cleans, scores and excerpts each
//! section from its raw body.

use serde::Serialize;
use std::time::Instant;

use super::category::Category;
use super::excerpt::extract_excerpt;
use super::keywords::KeywordIndex;
use super::scoring::score_section;
use super::tokenize::{excerpt_tokens, query_tokens, searchable_text};
use crate::section::{Section, SectionRegistry};
use crate::source::PLACEHOLDER_PHRASE;

/// Key that never takes part in search.
const RESERVED_KEY: &str = "default";

/// Shown in place of groups when a query matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Try different keywords or check spelling.";

/// One ranked section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub section_key: String,
    pub section_title: String,
    pub excerpt: String,
    pub category: Category,
    pub score: u32,
}

/// Results sharing a category, in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultGroup {
    pub category: Category,
    pub results: Vec<SearchResult>,
}

/// Everything a host needs to present one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    pub header: String,
    pub count: usize,
    pub groups: Vec<ResultGroup>,
    /// Set only when `count == 0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SearchResponse {
    pub fn count_label(&self) -> String {
        format!("{} result(s) found", self.count)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// All results in rank order, ignoring grouping.
    pub fn results(&self) -> impl Iterator<Item = &SearchResult> {
        self.groups.iter().flat_map(|group| group.results.iter())
    }
}

fn is_searchable(section: &Section) -> bool {
    section.key != RESERVED_KEY && !section.raw_body.contains(PLACEHOLDER_PHRASE)
}

/// Score every eligible section and return those with a positive score, best first.
/// Equal scores keep document order.
pub fn rank_sections(
    registry: &SectionRegistry,
    query: &str,
    keywords: &KeywordIndex,
) -> Vec<SearchResult> {
    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return Vec::new();
    }
    let excerpt_words = excerpt_tokens(query);

    let mut results: Vec<SearchResult> = registry
        .iter()
        .filter(|section| is_searchable(section))
        .filter_map(|section| {
            let text = searchable_text(&section.raw_body);
            if text.is_empty() {
                return None;
            }
            let score = score_section(&section.key, &section.title, &text, &tokens, keywords);
            (score > 0).then(|| SearchResult {
                section_key: section.key.clone(),
                section_title: section.title.clone(),
                excerpt: extract_excerpt(&text, &excerpt_words),
                category: Category::for_key(&section.key),
                score,
            })
        })
        .collect();

    // Vec::sort_by is stable
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// Group ranked results by category, categories ordered by first appearance.
pub fn group_by_category(results: Vec<SearchResult>) -> Vec<ResultGroup> {
    let mut groups: Vec<ResultGroup> = Vec::new();
    for result in results {
        match groups.iter_mut().find(|group| group.category == result.category) {
            Some(group) => group.results.push(result),
            None => groups.push(ResultGroup {
                category: result.category,
                results: vec![result],
            }),
        }
    }
    groups
}

/// Run `query` against `registry` and package the outcome for display.
pub fn search(registry: &SectionRegistry, query: &str, keywords: &KeywordIndex) -> SearchResponse {
    let start = Instant::now();
    let results = rank_sections(registry, query, keywords);
    let count = results.len();

    tracing::debug!(
        "Search {:?} matched {} of {} sections in {:?}",
        query,
        count,
        registry.len(),
        start.elapsed()
    );

    SearchResponse {
        header: format!("Search Results for: \"{}\"", query),
        count,
        groups: group_by_category(results),
        message: (count == 0).then(|| NO_RESULTS_MESSAGE.to_string()),
    }
}
