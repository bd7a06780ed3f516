//! Unit tests for CLI commands.

use super::*;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use spyglass_core::types::{PackageSummary, Person};
use spyglass_core::utils::rank;

use crate::{Commands, SortKey};

fn summary(name: &str, description: &str, keywords: &[&str]) -> PackageSummary {
    PackageSummary {
        name: name.to_string(),
        description: description.to_string(),
        version: "1.0.0".to_string(),
        keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
    }
}

fn sample_results() -> Vec<PackageSummary> {
    vec![
        summary("react", "UI library", &["ui", "framework"]),
        summary("express", "Web framework", &["http", "server"]),
        summary("lodash", "Utility belt", &["util"]),
    ]
}

/// Create a test command context against a local registry
fn create_test_context(registry: &str) -> CommandContext {
    CommandContext::new(Some(registry), false, true).expect("context should build")
}

#[test]
fn test_prepare_results_relevance_keeps_registry_order() {
    let results = search::prepare_results(sample_results(), None, SortKey::Relevance, false, None);

    let names: Vec<&str> = results.iter().map(|summary| summary.name.as_str()).collect();
    assert_eq!(names, ["react", "express", "lodash"]);
}

#[test]
fn test_prepare_results_sort_by_name() {
    let results = search::prepare_results(sample_results(), None, SortKey::Name, false, None);

    let names: Vec<&str> = results.iter().map(|summary| summary.name.as_str()).collect();
    assert_eq!(names, ["express", "lodash", "react"]);
}

#[test]
fn test_prepare_results_reverse() {
    let results = search::prepare_results(sample_results(), None, SortKey::Name, true, None);

    let names: Vec<&str> = results.iter().map(|summary| summary.name.as_str()).collect();
    assert_eq!(names, ["react", "lodash", "express"]);
}

#[test]
fn test_prepare_results_popularity_is_deterministic() {
    let first = search::prepare_results(sample_results(), None, SortKey::Popularity, false, None);
    let second = search::prepare_results(sample_results(), None, SortKey::Popularity, false, None);

    assert_eq!(first, second);

    // Most popular first.
    let scores: Vec<u32> = first
        .iter()
        .map(|summary| rank::popularity_score(&summary.name))
        .collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
}

#[test]
fn test_prepare_results_newest_first() {
    let first = search::prepare_results(sample_results(), None, SortKey::Newest, false, None);
    let second = search::prepare_results(sample_results(), None, SortKey::Newest, false, None);

    assert_eq!(first, second);

    // Most recent first: synthetic ages ascend down the listing.
    let ages: Vec<u64> = first
        .iter()
        .map(|summary| rank::synthetic_age(&summary.name))
        .collect();
    let mut sorted = ages.clone();
    sorted.sort();
    assert_eq!(ages, sorted);
}

#[test]
fn test_prepare_results_filter_narrows_locally() {
    let results = search::prepare_results(
        sample_results(),
        Some("framework"),
        SortKey::Relevance,
        false,
        None,
    );

    // Matches react (keyword) and express (description).
    let names: Vec<&str> = results.iter().map(|summary| summary.name.as_str()).collect();
    assert_eq!(names, ["react", "express"]);
}

#[test]
fn test_prepare_results_limit_caps_output() {
    let results = search::prepare_results(sample_results(), None, SortKey::Relevance, false, Some(2));
    assert_eq!(results.len(), 2);

    let all = search::prepare_results(sample_results(), None, SortKey::Relevance, false, Some(100));
    assert_eq!(all.len(), 3);
}

#[test]
fn test_format_person() {
    let person = Person::new("Jane Doe", "jane@example.com");
    assert_eq!(info::format_person(&person), "Jane Doe <jane@example.com>");

    let nameless = Person::new("Ghost", "");
    assert_eq!(info::format_person(&nameless), "Ghost");
}

#[test]
fn test_normalize_readme() {
    let raw = "# Title\r\nSome text   \r\n\r\nMore\n";
    assert_eq!(info::normalize_readme(raw), "# Title\nSome text\n\nMore");
}

#[test]
fn test_normalize_readme_leaves_fenced_code_untouched() {
    let raw = "# Title\n\n```text\ncode line  \n```\nafter   \n";

    // Trailing whitespace survives inside the fence; trimming resumes
    // after the closing delimiter.
    assert_eq!(
        info::normalize_readme(raw),
        "# Title\n\n```text\ncode line  \n```\nafter"
    );
}

#[test]
fn test_context_rejects_invalid_registry_url() {
    let result = CommandContext::new(Some("definitely not a url"), false, false);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_info_command_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/left-pad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "left-pad",
            "description": "String left pad",
            "dist-tags": {"latest": "1.3.0"},
            "versions": {"1.3.0": {"version": "1.3.0", "license": "WTFPL"}}
        })))
        .mount(&mock_server)
        .await;

    let ctx = create_test_context(&mock_server.uri());

    let result = dispatch_command(
        Commands::Info {
            name: "left-pad".to_string(),
            readme: true,
        },
        &ctx,
    )
    .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_info_command_surfaces_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let ctx = create_test_context(&mock_server.uri());

    let result = dispatch_command(
        Commands::Info {
            name: "ghost-package".to_string(),
            readme: false,
        },
        &ctx,
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_search_command_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/-/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "objects": [
                {"package": {"name": "react", "version": "18.2.0", "description": "UI library"}}
            ]
        })))
        .mount(&mock_server)
        .await;

    let ctx = create_test_context(&mock_server.uri());

    let result = dispatch_command(
        Commands::Search {
            term: "react".to_string(),
            sort: SortKey::Relevance,
            reverse: false,
            filter: None,
            limit: Some(10),
        },
        &ctx,
    )
    .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_featured_command_never_fails() {
    let mock_server = MockServer::start().await;

    // Every lookup 404s; the command still succeeds on fallback data.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let ctx = create_test_context(&mock_server.uri());

    let result = dispatch_command(Commands::Featured, &ctx).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_version_command() {
    let mock_server = MockServer::start().await;
    let ctx = create_test_context(&mock_server.uri());

    let result = dispatch_command(Commands::Version, &ctx).await;
    assert!(result.is_ok());
}
