mod common;

use assert2::{check, let_assert};
use common::{bundled_engine, sample_engine};
use rstest::rstest;
use userdoc::DocEngine;
use userdoc::search::{Category, NO_RESULTS_MESSAGE};
use userdoc::tools::search::{SearchDocsRequest, handle_search_docs};

/// Test: A title match alone puts exactly the matching section in the results.
#[rstest]
fn search_settings_finds_only_the_settings_section(mut sample_engine: DocEngine) {
    let response = sample_engine.search("settings");

    check!(response.count == 1);
    let results: Vec<_> = response.results().collect();
    let_assert!([result] = results.as_slice());
    check!(result.section_key == "settings_and_configuration");
    check!(result.section_title == "Settings and Configuration");
    check!(result.score >= 20);
    check!(result.category == Category::Configuration);
}

/// Test: Tokens shorter than three characters never match anything.
#[rstest]
#[case("ab")]
#[case("to")]
#[case("a b c")]
fn search_short_tokens_yield_no_results(mut bundled_engine: DocEngine, #[case] query: &str) {
    let response = bundled_engine.search(query);
    check!(response.count == 0);
    check!(response.groups.is_empty());
    check!(response.message.as_deref() == Some(NO_RESULTS_MESSAGE));
}

/// Test: The section named after the query outranks sections that only mention it.
#[rstest]
fn search_title_match_ranks_first(mut bundled_engine: DocEngine) {
    let response = bundled_engine.search("archive");
    let results: Vec<_> = response.results().collect();

    let_assert!(Some(first) = results.first());
    check!(first.section_key == "archive_management");
    check!(results.iter().any(|r| r.section_key == "key_features"));
    check!(results.iter().all(|r| r.score <= first.score));
}

/// Test: Groups hold every result exactly once, each category appearing once.
#[rstest]
fn search_groups_partition_results(mut bundled_engine: DocEngine) {
    let response = bundled_engine.search("conversion");

    check!(response.count > 1);
    check!(response.groups.iter().map(|g| g.results.len()).sum::<usize>() == response.count);

    let mut categories: Vec<_> = response.groups.iter().map(|g| g.category).collect();
    let before = categories.len();
    categories.dedup();
    check!(categories.len() == before);
    check!(response.count_label() == format!("{} result(s) found", response.count));
}

/// Test: Excerpts come from cleaned text: no heading markers, no code, no URLs.
#[rstest]
fn search_excerpts_are_clean(mut bundled_engine: DocEngine) {
    let response = bundled_engine.search("help issue");
    let results: Vec<_> = response.results().collect();

    let_assert!(Some(support) = results.iter().find(|r| r.section_key == "troubleshooting_and_support"));
    check!(!support.excerpt.contains("##"));
    check!(!support.excerpt.contains("https://"));
    check!(support.excerpt.to_lowercase().contains("help"));
    check!(support.category == Category::Support);
}

/// Test: The code-fenced file listing is not searchable.
#[rstest]
fn search_ignores_code_blocks(mut bundled_engine: DocEngine) {
    let response = bundled_engine.search("photo.jpg");
    check!(response.count == 0);
}

/// Test: Searching sets the highlight term for sections opened afterwards.
#[rstest]
fn search_highlights_opened_section(mut sample_engine: DocEngine) {
    sample_engine.search("toolbar");
    let content = sample_engine.load_section("settings_and_configuration");
    check!(content.markup.contains("<mark>toolbar</mark>"));
}

/// Test: The built-in document's placeholder section never shows up in results.
#[rstest]
fn search_skips_placeholder_content() {
    let mut engine = DocEngine::new(&userdoc::TextSource::new("unrelated", "# Other Manual\n"));
    check!(engine.is_fallback());

    let response = engine.search("batch processing");
    check!(response.results().all(|r| r.section_key != "getting_started"));
}

/// Test: The tool handler rejects blank queries before they reach the engine.
#[rstest]
#[case("")]
#[case("   ")]
fn search_tool_rejects_blank_query(mut sample_engine: DocEngine, #[case] query: &str) {
    let request = SearchDocsRequest {
        query: query.to_string(),
        json: false,
    };
    let_assert!(Err(message) = handle_search_docs(&mut sample_engine, request));
    check!(message.contains("empty"));
    check!(sample_engine.active_query().is_none());
}

/// Test: The tool output lists header, count, categories and excerpts.
#[rstest]
fn search_tool_formats_results(mut sample_engine: DocEngine) {
    let request = SearchDocsRequest {
        query: "settings".to_string(),
        json: false,
    };
    let_assert!(Ok(output) = handle_search_docs(&mut sample_engine, request));
    check!(output.starts_with("Search Results for: \"settings\"\n1 result(s) found\n"));
    check!(output.contains("## Configuration"));
    check!(output.contains("Settings and Configuration [settings_and_configuration]"));
}

/// Test: The tool output for no matches carries the "no results" message.
#[rstest]
fn search_tool_reports_no_results(mut sample_engine: DocEngine) {
    let request = SearchDocsRequest {
        query: "zebra".to_string(),
        json: false,
    };
    let_assert!(Ok(output) = handle_search_docs(&mut sample_engine, request));
    check!(output.contains("0 result(s) found"));
    check!(output.contains(NO_RESULTS_MESSAGE));
}

/// Test: JSON output carries the grouped results with category labels.
#[rstest]
fn search_tool_json_output(mut sample_engine: DocEngine) {
    let request = SearchDocsRequest {
        query: "settings".to_string(),
        json: true,
    };
    let_assert!(Ok(output) = handle_search_docs(&mut sample_engine, request));
    let_assert!(Ok(value) = serde_json::from_str::<serde_json::Value>(&output));
    check!(value["count"] == 1);
    check!(value["groups"][0]["category"] == "Configuration");
    check!(value["groups"][0]["results"][0]["section_key"] == "settings_and_configuration");
    check!(value.get("message").is_none());
}
