//! Policy Quiz Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the policy quiz workspace.
//!
//! # Overview
//!
//! This crate provides common functionality used across all workspace members:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Filenames**: Parsing of the `01_Document_Name.ext` naming convention
//! - **Checksums**: File integrity utilities for catalogued documents
//! - **Types**: Resource types and catalog records
//!
//! # Example
//!
//! ```no_run
//! use policyquiz_common::filename::parse_document_filename;
//! use policyquiz_common::Result;
//!
//! fn describe(filename: &str) -> Result<()> {
//!     let parsed = parse_document_filename(filename)?;
//!     println!("{} -> {} ({})", parsed.index, parsed.name, parsed.extension);
//!     Ok(())
//! }
//! ```

pub mod checksum;
pub mod error;
pub mod filename;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{QuizError, Result};
pub use types::{DocumentRecord, ResourceType};
