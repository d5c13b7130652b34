//! Navigation manifest service
//!
//! Appends the problem section to the site manifest. Appending is not
//! idempotent: run it once per full rebuild.

use std::path::Path;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::{
    constants::{NAV_PAGES_DIR, NAV_SECTION_HEADER},
    error::AppResult,
    models::{padded_id, StatStatusEntry},
};

/// Navigation service for the site manifest
pub struct NavigationService;

impl NavigationService {
    /// Section header followed by one entry per problem, in the given order
    pub fn render_entries(entries: &[StatStatusEntry]) -> String {
        let mut section = String::from(NAV_SECTION_HEADER);

        for entry in entries {
            section.push_str(&format!(
                "      - \"{}. {}\": {}/{}.md\n",
                entry.frontend_id(),
                escape_quoted(entry.title()),
                NAV_PAGES_DIR,
                padded_id(entry.frontend_id())
            ));
        }

        section
    }

    /// Append the problem section to the manifest, creating it when absent
    pub async fn append_entries(path: &Path, entries: &[StatStatusEntry]) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;

        file.write_all(Self::render_entries(entries).as_bytes()).await?;
        file.flush().await?;

        tracing::info!("Appended {} navigation entries to {:?}", entries.len(), path);
        Ok(())
    }
}

/// Escape a title for a double-quoted YAML scalar
fn escape_quoted(title: &str) -> String {
    title.replace('\\', "\\\\").replace('"', "\\\"")
}
