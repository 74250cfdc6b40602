//! Command implementations

pub mod list;
pub mod process;
pub mod summary;

use crate::config::{metadata_path_in, IngestConfig};
use policyquiz_common::Result;
use std::path::PathBuf;

/// Catalog to read: an explicit path, or the one in the configured processed directory
pub(crate) fn resolve_metadata_path(metadata: Option<PathBuf>) -> Result<PathBuf> {
    match metadata {
        Some(path) => Ok(path),
        None => Ok(metadata_path_in(&IngestConfig::load()?.processed_documents_path)),
    }
}
