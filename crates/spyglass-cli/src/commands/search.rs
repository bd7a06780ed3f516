//! `spyglass search` command implementation.
//!
//! Runs a registry search through the shared session, then narrows,
//! orders, and caps the results locally before rendering.

use std::cmp::Reverse;

use spyglass_core::error::ExplorerResult;
use spyglass_core::types::PackageSummary;
use spyglass_core::utils::rank;

use super::CommandContext;
use crate::SortKey;

/// Keywords shown per result before the `+N more` marker
const KEYWORD_DISPLAY_CAP: usize = 5;

/// Execute the `spyglass search` command
pub async fn execute(
    term: &str,
    sort: SortKey,
    reverse: bool,
    filter: Option<&str>,
    limit: Option<usize>,
    ctx: &CommandContext,
) -> ExplorerResult<()> {
    if !ctx.json {
        ctx.output.step("🔎", &format!("Searching for \"{}\"", term));
    }

    let Some(results) = ctx.session.search(term).await? else {
        // A newer search superseded this one; nothing to render.
        return Ok(());
    };

    let results = prepare_results(results, filter, sort, reverse, limit);

    if ctx.json {
        ctx.output.json(&results);
        return Ok(());
    }

    if results.is_empty() {
        ctx.output.info("No packages matched.");
        return Ok(());
    }

    ctx.output.info(&format!("{} result(s)", results.len()));
    for summary in &results {
        render_summary(summary, ctx);
    }

    Ok(())
}

/// Apply local narrowing, ordering, and the display cap to fetched
/// results. Relevance keeps the registry's own order.
pub(crate) fn prepare_results(
    mut results: Vec<PackageSummary>,
    filter: Option<&str>,
    sort: SortKey,
    reverse: bool,
    limit: Option<usize>,
) -> Vec<PackageSummary> {
    if let Some(query) = filter {
        results.retain(|summary| summary.matches(query));
    }

    match sort {
        SortKey::Relevance => {}
        SortKey::Name => results.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Popularity => {
            results.sort_by_key(|summary| Reverse(rank::popularity_score(&summary.name)))
        }
        SortKey::Newest => results.sort_by_key(|summary| rank::synthetic_age(&summary.name)),
    }
    if reverse {
        results.reverse();
    }

    if let Some(limit) = limit {
        results.truncate(limit);
    }

    results
}

fn render_summary(summary: &PackageSummary, ctx: &CommandContext) {
    let downloads = rank::format_count(rank::synthetic_downloads(&summary.name));
    let stars = rank::format_count(rank::synthetic_stars(&summary.name));

    ctx.output
        .success(&format!("{} v{}", summary.name, summary.version));
    ctx.output.info(&format!("  {}", summary.description));
    ctx.output.info(&format!("  ↓ {}  ★ {}", downloads, stars));

    if !summary.keywords.is_empty() {
        let shown: Vec<&str> = summary
            .keywords
            .iter()
            .take(KEYWORD_DISPLAY_CAP)
            .map(String::as_str)
            .collect();
        let mut line = format!("  [{}]", shown.join(", "));
        if summary.keywords.len() > KEYWORD_DISPLAY_CAP {
            line.push_str(&format!(
                " +{} more",
                summary.keywords.len() - KEYWORD_DISPLAY_CAP
            ));
        }
        ctx.output.info(&line);
    }
}
