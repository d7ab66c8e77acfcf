//! Handler for `placegrab collect`: builds the client, runs every query, and
//! writes the CSV once at the end.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use placegrab_collect::{collect_all, write_csv, CollectOptions};
use placegrab_core::{AppConfig, SearchQuery};
use placegrab_places::{PlacesClient, TokioSleeper};

/// Queries from `path` when given, otherwise the built-in defaults.
pub(crate) fn resolve_queries(path: Option<&Path>) -> anyhow::Result<Vec<SearchQuery>> {
    match path {
        Some(path) => placegrab_core::load_queries(path)
            .with_context(|| format!("failed to load queries from {}", path.display())),
        None => Ok(placegrab_core::default_queries()),
    }
}

/// Run a full collection and write the result file.
///
/// When `dry_run` is `true` the function prints the queries and output path
/// and returns without making any request.
///
/// # Errors
///
/// Returns an error if the queries file is invalid, the client cannot be
/// built, a search request fails under the `abort` policy, or the output
/// file cannot be written. Nothing is written on error.
pub(crate) async fn run_collect(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    let queries = resolve_queries(config.queries_path.as_deref())?;

    if dry_run {
        let labels: Vec<&str> = queries.iter().map(SearchQuery::category).collect();
        println!(
            "dry-run: would search {} queries [{}] and write {}",
            queries.len(),
            labels.join(", "),
            config.output_path.display()
        );
        return Ok(());
    }

    let client = PlacesClient::with_base_url(
        &config.places_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.api_base_url,
    )
    .context("failed to build Places client")?;

    let options = CollectOptions {
        page_delay: Duration::from_millis(config.page_delay_ms),
        on_search_error: config.on_search_error,
    };

    let collection = collect_all(&client, &TokioSleeper, &queries, &options)
        .await
        .context("collection aborted; no output written")?;

    let written = write_csv(&config.output_path, &collection.records)
        .context("failed to write output file")?;

    for skipped in collection.skipped() {
        println!(
            "skipped '{}' after {} records: {}",
            skipped.query,
            skipped.records,
            skipped.error.as_deref().unwrap_or("unknown error")
        );
    }
    println!(
        "saved {written} records to {}",
        config.output_path.display()
    );

    Ok(())
}

/// Print each query with the category label it will be written under.
pub(crate) fn print_queries(path: Option<&Path>) -> anyhow::Result<()> {
    let queries = resolve_queries(path)?;
    for query in &queries {
        println!("{}\t{query}", query.category());
    }
    Ok(())
}
