//! `policyquiz-ingest summary` command implementation
//!
//! Shows document counts from a catalog written by `process`.

use super::resolve_metadata_path;
use crate::catalog::Catalog;
use crate::output::format_summary;
use policyquiz_common::Result;
use std::path::PathBuf;
use tracing::debug;

/// Print counts by manual and resource type
pub async fn run(metadata: Option<PathBuf>) -> Result<()> {
    let path = resolve_metadata_path(metadata)?;
    debug!(path = %path.display(), "Reading catalog");

    let catalog = Catalog::read_csv(&path)?;
    print!("{}", format_summary(&catalog));
    Ok(())
}
