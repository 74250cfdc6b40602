//! Policy Quiz Ingest Library
//!
//! Builds the metadata catalog of policy documents the quiz bot draws on.
//!
//! Raw documents are organised as policy manuals, each holding up to four
//! resource type folders (`Policy`, `Procedures`, `Tools`, `Education`).
//! Every file found there becomes one row of `document_metadata.csv`.
//!
//! # Example
//!
//! ```no_run
//! use policyquiz_ingest::{config::IngestConfig, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = IngestConfig::load()?.with_raw_documents_path("./data/raw");
//!     let report = pipeline::run(&config).await?;
//!     println!("Catalogued {} documents", report.documents);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod scanner;

// Re-export commonly used types
pub use catalog::Catalog;
pub use cli::{Cli, Commands, OutputFormat};
pub use config::IngestConfig;
pub use pipeline::IngestReport;
pub use scanner::process_policy_documents;
