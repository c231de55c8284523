//! Section search: query tokenization, relevance scoring, excerpts and category grouping.
//!
//! Ranking is recomputed from the raw section bodies on every query.

pub(crate) mod category;
pub(crate) mod excerpt;
pub(crate) mod index;
pub(crate) mod keywords;
pub(crate) mod scoring;
pub(crate) mod tokenize;

pub use category::Category;
pub use excerpt::extract_excerpt;
pub use index::{
    NO_RESULTS_MESSAGE, ResultGroup, SearchResponse, SearchResult, group_by_category,
    rank_sections, search,
};
pub use keywords::KeywordIndex;
pub use scoring::{count_word_occurrences, score_section};
pub use tokenize::{excerpt_tokens, query_tokens, searchable_text};
