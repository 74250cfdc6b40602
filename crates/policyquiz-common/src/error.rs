//! Error types for the policy quiz workspace

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for policy quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

/// Main error type for policy quiz operations
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid filename pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Documents directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Metadata catalog not found: {}. Run the process command first to create it.", .0.display())]
    CatalogNotFound(PathBuf),

    #[error("Invalid resource type: '{0}'. Expected one of Policy, Procedures, Tools, Education")]
    InvalidResourceType(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Background task failed: {0}")]
    Join(String),
}

impl QuizError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
