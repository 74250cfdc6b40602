//! `policyquiz-ingest list` command implementation

use super::resolve_metadata_path;
use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::output::render_catalog;
use policyquiz_common::{ResourceType, Result};
use std::path::PathBuf;
use tracing::debug;

/// Print catalog records, optionally filtered
pub async fn run(
    metadata: Option<PathBuf>,
    manual: Option<&str>,
    resource_type: Option<ResourceType>,
    format: OutputFormat,
) -> Result<()> {
    let path = resolve_metadata_path(metadata)?;
    debug!(path = %path.display(), "Reading catalog");

    let catalog = Catalog::read_csv(&path)?.filter(manual, resource_type);
    debug!(matches = catalog.len(), "Filtered catalog");

    print!("{}", render_catalog(&catalog, format)?);
    Ok(())
}
