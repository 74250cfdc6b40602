//! End-to-end ingestion run: scan, summarize, persist

use crate::catalog::Catalog;
use crate::config::IngestConfig;
use crate::scanner::process_policy_documents;
use policyquiz_common::{QuizError, ResourceType, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Outcome of an ingestion run
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    /// Number of documents catalogued
    pub documents: usize,

    /// Where the catalog was written; `None` when nothing was found
    pub metadata_path: Option<PathBuf>,

    pub by_manual: Vec<(String, usize)>,

    pub by_resource_type: Vec<(ResourceType, usize)>,

    #[serde(skip)]
    pub catalog: Catalog,
}

/// Run a full ingestion with the given configuration
///
/// An empty scan still creates the processed directory but never writes or
/// replaces the catalog file.
pub async fn run(config: &IngestConfig) -> Result<IngestReport> {
    info!("Starting document processing...");

    let root = config.raw_documents_path.clone();
    let compute_checksums = config.compute_checksums;
    let catalog = blocking(move || {
        let catalog = process_policy_documents(&root)?;
        if compute_checksums && !catalog.is_empty() {
            info!("Computing document checksums");
            return catalog.with_checksums();
        }
        Ok(catalog)
    })
    .await?;

    info!("Processed {} documents", catalog.len());

    let by_manual = catalog.counts_by_manual();
    let by_resource_type = catalog.counts_by_resource_type();

    if catalog.is_empty() {
        info!("No documents were processed.");
    } else {
        for (manual, count) in &by_manual {
            info!(manual = %manual, count, "Summary by policy manual");
        }
        for (resource_type, count) in &by_resource_type {
            info!(resource_type = %resource_type, count, "Summary by resource type");
        }
    }

    tokio::fs::create_dir_all(&config.processed_documents_path).await?;
    let metadata_path = config.metadata_path();
    info!("Saving metadata to: {}", metadata_path.display());

    let metadata_path = if catalog.is_empty() {
        info!("No metadata to save");
        None
    } else {
        let to_write = catalog.clone();
        let path = metadata_path.clone();
        blocking(move || to_write.write_csv(&path)).await?;
        info!("Saved metadata for {} documents", catalog.len());
        Some(metadata_path)
    };

    info!("Document processing complete!");

    Ok(IngestReport {
        documents: catalog.len(),
        metadata_path,
        by_manual,
        by_resource_type,
        catalog,
    })
}

/// Run filesystem-bound work on the blocking pool
async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| QuizError::Join(e.to_string()))?
}
