//! Command handlers
//!
//! Thin layer wiring the services into the two runs the CLI exposes.

use std::sync::Arc;

use crate::{
    clients::{annotation_source, LeetCodeClient},
    constants::MOCK_ENTRY_LIMIT,
    error::AppResult,
    models::StatStatusEntry,
    services::{
        CatalogService, NavigationService, PageGenerator, PageReport, ProgressSummary,
        ReadmeService, SolutionIndex,
    },
    state::AppState,
};

/// Generate every problem page, then append the navigation section.
///
/// With `mock`, only the first entries of the sorted catalog are processed.
/// Annotation rows are never truncated, so row alignment is unaffected.
pub async fn generate_docs(state: &AppState, mock: bool) -> AppResult<PageReport> {
    let config = state.config();
    let client = LeetCodeClient::new(state.clone());

    let catalog = CatalogService::fetch_catalog(&client).await?;
    let source = annotation_source(state)?;
    let annotations = CatalogService::fetch_annotations(source.as_ref()).await?;
    let entries = working_set(catalog.entries, mock);

    let solutions = SolutionIndex::build(&config.paths.solutions)?;
    tokio::fs::create_dir_all(&config.paths.problems).await?;

    let generator = PageGenerator::new(
        Arc::new(client),
        Arc::new(solutions),
        Arc::new(annotations),
        config.paths.problems.clone(),
        config.leetcode.problem_url.clone(),
    );
    let report = generator
        .write_pages(&entries, config.pipeline.workers)
        .await?;

    NavigationService::append_entries(&config.paths.mkdocs, &entries).await?;

    Ok(report)
}

/// Entries processed by a run; `mock` keeps only the first sorted entries
pub fn working_set(mut entries: Vec<StatStatusEntry>, mock: bool) -> Vec<StatStatusEntry> {
    if mock {
        entries.truncate(MOCK_ENTRY_LIMIT);
        tracing::info!("Mock run: limited to {} entries", entries.len());
    }
    entries
}

/// Recount progress and patch the readme badges
pub async fn update_readme(state: &AppState) -> AppResult<ProgressSummary> {
    let config = state.config();
    let client = LeetCodeClient::new(state.clone());

    let catalog = CatalogService::fetch_catalog(&client).await?;
    let solutions = SolutionIndex::build(&config.paths.solutions)?;

    let summary = ProgressSummary::compute(&catalog, &solutions);
    ReadmeService::write_summary(&config.paths.readme, &summary).await?;

    Ok(summary)
}
