//! The documentation engine: one loaded document, its rendered sections, search and history.
//!
//! All operations are synchronous and infallible. A host that shares an engine between
//! callers must serialize access itself.

use ahash::AHashMap;
use serde::Serialize;
use std::time::Instant;

use crate::config::EngineConfig;
use crate::error::SourceError;
use crate::navigation::NavigationHistory;
use crate::render::{compose_page, not_found_page, render_body};
use crate::search::{self, KeywordIndex, SearchResponse};
use crate::section::{DEFAULT_KEY, Lookup, Section, SectionRegistry, split_sections};
use crate::source::{
    DEFAULT_DOCUMENT, DEFAULT_MARKER, DocumentOrigin, DocumentSource, LoadedDocument,
    load_document,
};

const BREADCRUMB_ROOT: &str = "Documentation";
const NOT_FOUND_TITLE: &str = "Section Not Found";

/// How a requested key was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The requested section exists.
    Exact,
    /// Unknown key; the default section is shown instead.
    DefaultFallback,
    /// Neither the key nor the default section exists; a placeholder is shown.
    NotFound,
}

/// A section ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedContent {
    /// Key of the section shown (the requested key when nothing resolved).
    pub key: String,
    pub title: String,
    pub breadcrumb: String,
    /// Complete display document.
    pub markup: String,
    pub can_go_back: bool,
    pub resolution: Resolution,
}

/// A parsed document with everything derived from it.
struct Loaded {
    registry: SectionRegistry,
    fragments: AHashMap<String, String>,
    origin: DocumentOrigin,
    fingerprint: u64,
}

fn build(doc: LoadedDocument, marker: &str) -> Loaded {
    let start = Instant::now();
    let LoadedDocument {
        text,
        mut origin,
        fingerprint,
    } = doc;

    // The built-in document is always titled with the default marker.
    let marker = if origin.is_fallback() { DEFAULT_MARKER } else { marker };
    let mut registry = split_sections(&text, marker);
    if registry.is_empty() {
        let reason = SourceError::NoSections {
            source_name: origin.to_string(),
        };
        tracing::warn!("Using fallback documentation content: {}", reason);
        registry = split_sections(DEFAULT_DOCUMENT, DEFAULT_MARKER);
        origin = DocumentOrigin::Fallback { reason };
    }

    let fragments: AHashMap<String, String> = registry
        .iter()
        .map(|section| (section.key.clone(), render_body(&section.raw_body)))
        .collect();

    tracing::info!(
        "Loaded {} documentation sections from {} in {:?}",
        registry.len(),
        origin,
        start.elapsed()
    );

    Loaded {
        registry,
        fragments,
        origin,
        fingerprint,
    }
}

/// Documentation engine state.
pub struct DocEngine {
    registry: SectionRegistry,
    /// Rendered body per section key, without highlighting or the document shell.
    fragments: AHashMap<String, String>,
    keywords: KeywordIndex,
    history: NavigationHistory,
    active_query: Option<String>,
    origin: DocumentOrigin,
    fingerprint: u64,
    marker: String,
}

impl DocEngine {
    /// Load `source` with default settings.
    pub fn new(source: &dyn DocumentSource) -> Self {
        Self::with_config(source, &EngineConfig::default())
    }

    /// Load `source` using the marker and boost keywords from `config`.
    pub fn with_config(source: &dyn DocumentSource, config: &EngineConfig) -> Self {
        let loaded = build(load_document(source, &config.marker), &config.marker);
        Self {
            registry: loaded.registry,
            fragments: loaded.fragments,
            keywords: config.keyword_index(),
            history: NavigationHistory::default(),
            active_query: None,
            origin: loaded.origin,
            fingerprint: loaded.fingerprint,
            marker: config.marker.clone(),
        }
    }

    /// Discard everything and load `source` again. History restarts at the default section
    /// and any active search is cleared.
    pub fn reload(&mut self, source: &dyn DocumentSource) {
        let doc = load_document(source, &self.marker);
        self.apply(doc);
    }

    /// Reload only if the source text changed since the last load. Returns whether it did.
    pub fn refresh(&mut self, source: &dyn DocumentSource) -> bool {
        let doc = load_document(source, &self.marker);
        if doc.fingerprint == self.fingerprint {
            tracing::debug!("Documentation unchanged ({:016x})", doc.fingerprint);
            return false;
        }
        self.apply(doc);
        true
    }

    fn apply(&mut self, doc: LoadedDocument) {
        let loaded = build(doc, &self.marker);
        self.registry = loaded.registry;
        self.fragments = loaded.fragments;
        self.origin = loaded.origin;
        self.fingerprint = loaded.fingerprint;
        self.history.reset(DEFAULT_KEY);
        self.active_query = None;
    }

    /// Show `key`, recording the shown section in the history.
    ///
    /// Unknown keys show the default section; if that is missing too, a placeholder page is
    /// shown and the requested key is recorded.
    pub fn load_section(&mut self, key: &str) -> RenderedContent {
        let shown = match self.registry.lookup(key) {
            Lookup::Exact(section) | Lookup::Default(section) => section.key.clone(),
            Lookup::Missing => key.to_string(),
        };
        tracing::debug!("Loading section '{}' (requested '{}')", shown, key);
        self.history.push(&shown);
        self.render(key)
    }

    /// Return to the previous section, re-rendering it with the current search term.
    /// `None` when there is nothing to go back to.
    pub fn back(&mut self) -> Option<RenderedContent> {
        let key = self.history.back()?.to_string();
        Some(self.render(&key))
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// Re-render the section at the top of the history without recording a visit.
    pub fn current(&self) -> RenderedContent {
        self.render(self.history.current().unwrap_or(DEFAULT_KEY))
    }

    /// Show the default section.
    pub fn home(&mut self) -> RenderedContent {
        self.load_section(DEFAULT_KEY)
    }

    /// Rank sections for `query`. A non-blank query becomes the highlight term for sections
    /// rendered afterwards.
    pub fn search(&mut self, query: &str) -> SearchResponse {
        let query = query.trim();
        if !query.is_empty() {
            self.active_query = Some(query.to_string());
        }
        search::search(&self.registry, query, &self.keywords)
    }

    /// Drop the highlight term and re-render the current section.
    pub fn clear_search(&mut self) -> RenderedContent {
        self.active_query = None;
        self.current()
    }

    /// Key a title maps to, for hosts building their own navigation trees.
    pub fn title_to_key(&self, title: &str) -> String {
        crate::section::title_to_key(title)
    }

    /// Sections in document order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.registry.iter()
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn active_query(&self) -> Option<&str> {
        self.active_query.as_deref()
    }

    pub fn origin(&self) -> &DocumentOrigin {
        &self.origin
    }

    /// Whether the built-in default document is loaded instead of the source.
    pub fn is_fallback(&self) -> bool {
        self.origin.is_fallback()
    }

    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    fn render(&self, key: &str) -> RenderedContent {
        let (section, resolution) = match self.registry.lookup(key) {
            Lookup::Exact(section) => (section, Resolution::Exact),
            Lookup::Default(section) => (section, Resolution::DefaultFallback),
            Lookup::Missing => {
                return RenderedContent {
                    key: key.to_string(),
                    title: NOT_FOUND_TITLE.to_string(),
                    breadcrumb: format!("{} > {}", BREADCRUMB_ROOT, NOT_FOUND_TITLE),
                    markup: not_found_page(key),
                    can_go_back: self.can_go_back(),
                    resolution: Resolution::NotFound,
                };
            }
        };

        let markup = match self.fragments.get(&section.key) {
            Some(fragment) => compose_page(fragment, self.active_query()),
            None => compose_page(&render_body(&section.raw_body), self.active_query()),
        };

        RenderedContent {
            key: section.key.clone(),
            title: section.title.clone(),
            breadcrumb: format!("{} > {}", BREADCRUMB_ROOT, section.title),
            markup,
            can_go_back: self.can_go_back(),
            resolution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::TextSource;
    use assert2::{check, let_assert};

    const DOC: &str = "\
# Welcome to FileX
Start here.

## Quick Start
Drop files on the window.

## Settings and Configuration
Open the **settings** panel.
";

    fn engine() -> DocEngine {
        DocEngine::new(&TextSource::new("memory", DOC))
    }

    #[test]
    fn test_fresh_engine_sits_on_welcome() {
        let engine = engine();
        check!(!engine.is_fallback());
        check!(!engine.can_go_back());
        let current = engine.current();
        check!(current.key == "welcome");
        check!(current.title == "Welcome to FileX");
        check!(current.breadcrumb == "Documentation > Welcome to FileX");
    }

    #[test]
    fn test_load_exact_section() {
        let mut engine = engine();
        let content = engine.load_section("quick_start");
        check!(content.resolution == Resolution::Exact);
        check!(content.markup.contains("<h2>Quick Start</h2>"));
        check!(content.can_go_back);
        check!(engine.history().len() == 2);
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        let mut engine = engine();
        let content = engine.load_section("nonexistent");
        check!(content.resolution == Resolution::DefaultFallback);
        check!(content.key == "welcome");
        check!(engine.history().current() == Some("welcome"));
    }

    #[test]
    fn test_missing_default_yields_placeholder() {
        let mut engine = DocEngine::new(&TextSource::new(
            "memory",
            "Welcome to FileX\n## Only Section\ntext\n",
        ));
        check!(!engine.is_fallback());
        let content = engine.load_section("nope");
        check!(content.resolution == Resolution::NotFound);
        check!(content.key == "nope");
        check!(content.markup.contains("Section Not Found"));
        check!(engine.history().current() == Some("nope"));
    }

    #[test]
    fn test_back_rerenders_with_current_highlight() {
        let mut engine = engine();
        engine.load_section("settings_and_configuration");
        engine.load_section("quick_start");
        engine.search("settings");

        let_assert!(Some(content) = engine.back());
        check!(content.key == "settings_and_configuration");
        check!(content.markup.contains("<strong><mark>settings</mark></strong>"));
    }

    #[test]
    fn test_back_on_single_entry() {
        let mut engine = engine();
        check!(engine.back().is_none());
        check!(engine.history().len() == 1);
    }

    #[test]
    fn test_clear_search_removes_highlight() {
        let mut engine = engine();
        engine.load_section("settings_and_configuration");
        engine.search("settings");
        check!(engine.current().markup.contains("<mark>"));

        let content = engine.clear_search();
        check!(engine.active_query().is_none());
        check!(!content.markup.contains("<mark>"));
        check!(engine.history().len() == 2);
    }

    #[test]
    fn test_blank_search_keeps_previous_term() {
        let mut engine = engine();
        engine.search("settings");
        let response = engine.search("   ");
        check!(response.count == 0);
        check!(engine.active_query() == Some("settings"));
    }

    #[test]
    fn test_refresh_detects_changes() {
        let mut engine = engine();
        engine.load_section("quick_start");
        check!(!engine.refresh(&TextSource::new("memory", DOC)));
        check!(engine.history().len() == 2);

        let changed = format!("{}\n## File History\nRecords.\n", DOC);
        check!(engine.refresh(&TextSource::new("memory", changed)));
        check!(engine.registry().contains("file_history"));
        check!(engine.history().len() == 1);
    }

    #[test]
    fn test_headingless_document_falls_back() {
        let engine = DocEngine::new(&TextSource::new("memory", "Welcome to FileX, no headings."));
        check!(engine.is_fallback());
        let_assert!(DocumentOrigin::Fallback { reason } = engine.origin());
        check!(matches!(reason, SourceError::NoSections { .. }));
        check!(engine.registry().contains("welcome"));
    }
}
