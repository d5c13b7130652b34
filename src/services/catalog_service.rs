//! Catalog service
//!
//! Produces the sorted problem list and the position-aligned annotation rows
//! every later stage works from.

use serde_json::Value;

use crate::{
    clients::{AnnotationSource, LeetCodeClient},
    error::{AppError, AppResult},
    models::{AnnotationRow, Catalog, CatalogMetadata},
};

/// Catalog service for fetching and normalizing problem metadata
pub struct CatalogService;

impl CatalogService {
    /// Fetch the full catalog, sorted ascending by frontend id
    pub async fn fetch_catalog(client: &LeetCodeClient) -> AppResult<Catalog> {
        let body = client.fetch_catalog_body().await?;
        let catalog = Self::parse_catalog(&body)?;

        tracing::info!(
            "Fetched catalog: {} entries, {} problems in total",
            catalog.entries.len(),
            catalog.num_total
        );

        Ok(catalog)
    }

    /// Decode and sort a catalog body.
    ///
    /// A body that is not JSON is a `Network` error; a JSON body missing
    /// required fields is a `Schema` error. Duplicate frontend ids are rejected.
    pub fn parse_catalog(body: &[u8]) -> AppResult<Catalog> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::Network(format!("undecodable catalog response: {}", e)))?;

        let metadata: CatalogMetadata = serde_json::from_value(value)
            .map_err(|e| AppError::Schema(format!("catalog: {}", e)))?;

        let mut entries = metadata.stat_status_pairs;
        entries.sort_by_key(|entry| entry.frontend_id());

        if let Some(pair) = entries
            .windows(2)
            .find(|pair| pair[0].frontend_id() == pair[1].frontend_id())
        {
            return Err(AppError::Schema(format!(
                "duplicate frontend id {} ('{}' and '{}')",
                pair[0].frontend_id(),
                pair[0].title(),
                pair[1].title()
            )));
        }

        Ok(Catalog {
            entries,
            num_total: metadata.num_total,
        })
    }

    /// Fetch annotation rows in spreadsheet order
    pub async fn fetch_annotations(source: &dyn AnnotationSource) -> AppResult<Vec<AnnotationRow>> {
        let records = source.fetch_records().await?;

        let rows = records
            .iter()
            .enumerate()
            .map(|(position, record)| AnnotationRow::from_record(position, record))
            .collect::<AppResult<Vec<_>>>()?;

        tracing::info!("Fetched {} annotation rows", rows.len());
        Ok(rows)
    }
}
