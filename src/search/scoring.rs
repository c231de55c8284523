//! Relevance scoring for documentation sections.
//!
//! Per query token (already filtered by length):
//! - 20: the section title contains the token
//! - 5: per whole-word occurrence in the searchable text
//! - 15: the token is a boost keyword of the section

use regex::RegexBuilder;

use super::keywords::KeywordIndex;

pub(crate) const TITLE_MATCH_SCORE: u32 = 20;
pub(crate) const OCCURRENCE_SCORE: u32 = 5;
pub(crate) const KEYWORD_BOOST_SCORE: u32 = 15;

/// Count case-insensitive whole-word occurrences of `word` in `text`.
pub fn count_word_occurrences(text: &str, word: &str) -> usize {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(word)))
        .case_insensitive(true)
        .build()
        .map_or(0, |pattern| pattern.find_iter(text).count())
}

/// Score one section against the query tokens.
pub fn score_section(
    key: &str,
    title: &str,
    searchable: &str,
    tokens: &[String],
    keywords: &KeywordIndex,
) -> u32 {
    let title = title.to_lowercase();
    tokens
        .iter()
        .map(|token| {
            let mut score = 0;
            if title.contains(token.as_str()) {
                score += TITLE_MATCH_SCORE;
            }
            score += OCCURRENCE_SCORE * count_word_occurrences(searchable, token) as u32;
            if keywords.is_boosted(key, token) {
                score += KEYWORD_BOOST_SCORE;
            }
            score
        })
        .sum()
}
