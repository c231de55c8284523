//! User documentation engine: splits a markup document into keyed sections, renders them to
//! HTML, ranks search results and tracks navigation history. The binary serves it over MCP.

pub mod config;
pub mod engine;
pub mod error;
pub mod navigation;
pub mod render;
pub mod search;
pub mod section;
pub mod server;
pub mod source;
pub mod tools;
pub mod tracing;

pub use config::EngineConfig;
pub use engine::{DocEngine, RenderedContent, Resolution};
pub use error::{Result, SourceError};
pub use navigation::NavigationHistory;
pub use search::{Category, KeywordIndex, ResultGroup, SearchResponse, SearchResult};
pub use section::{DEFAULT_KEY, Lookup, Section, SectionRegistry, split_sections, title_to_key};
pub use source::{
    BundledSource, DEFAULT_DOCUMENT, DocumentOrigin, DocumentSource, FileSource, TextSource,
    load_document,
};
