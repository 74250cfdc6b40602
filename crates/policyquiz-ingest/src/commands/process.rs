//! `policyquiz-ingest process` command implementation

use crate::config::IngestConfig;
use crate::output::format_report;
use crate::pipeline::{self, IngestReport};
use crate::progress::create_spinner;
use policyquiz_common::Result;
use std::path::PathBuf;

/// Run the ingestion pipeline and print its report
pub async fn run(
    raw_dir: Option<PathBuf>,
    processed_dir: Option<PathBuf>,
    checksums: bool,
) -> Result<IngestReport> {
    let mut config = IngestConfig::load()?.with_checksums(checksums);
    if let Some(dir) = raw_dir {
        config = config.with_raw_documents_path(dir);
    }
    if let Some(dir) = processed_dir {
        config = config.with_processed_documents_path(dir);
    }

    let spinner = create_spinner("Scanning policy manuals...");
    let result = pipeline::run(&config).await;
    spinner.finish_and_clear();

    let report = result?;
    print!("{}", format_report(&report));
    Ok(report)
}
