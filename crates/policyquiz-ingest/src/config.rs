//! Ingestion configuration
//!
//! Paths come from the environment (optionally via a `.env` file) and can be
//! overridden per invocation from the command line.

use policyquiz_common::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration Constants
// ============================================================================

/// Default location of the raw policy manuals
pub const DEFAULT_RAW_DOCUMENTS_PATH: &str = "./data/raw";

/// Default location for processed output
pub const DEFAULT_PROCESSED_DOCUMENTS_PATH: &str = "./data/processed";

/// File name of the catalog written into the processed directory
pub const METADATA_FILE_NAME: &str = "document_metadata.csv";

/// Environment variable naming the raw documents directory
pub const RAW_DOCUMENTS_PATH_VAR: &str = "RAW_DOCUMENTS_PATH";

/// Environment variable naming the processed documents directory
pub const PROCESSED_DOCUMENTS_PATH_VAR: &str = "PROCESSED_DOCUMENTS_PATH";

/// Settings for one ingestion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Directory holding one folder per policy manual
    pub raw_documents_path: PathBuf,

    /// Directory the catalog is written to
    pub processed_documents_path: PathBuf,

    /// Record file size and SHA-256 for every document
    #[serde(default)]
    pub compute_checksums: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            raw_documents_path: PathBuf::from(DEFAULT_RAW_DOCUMENTS_PATH),
            processed_documents_path: PathBuf::from(DEFAULT_PROCESSED_DOCUMENTS_PATH),
            compute_checksums: false,
        }
    }
}

impl IngestConfig {
    /// Load configuration from the environment, reading `.env` if present
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            raw_documents_path: path_var(RAW_DOCUMENTS_PATH_VAR, DEFAULT_RAW_DOCUMENTS_PATH)?,
            processed_documents_path: path_var(
                PROCESSED_DOCUMENTS_PATH_VAR,
                DEFAULT_PROCESSED_DOCUMENTS_PATH,
            )?,
            compute_checksums: false,
        })
    }

    pub fn with_raw_documents_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.raw_documents_path = path.into();
        self
    }

    pub fn with_processed_documents_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.processed_documents_path = path.into();
        self
    }

    pub fn with_checksums(mut self, enabled: bool) -> Self {
        self.compute_checksums = enabled;
        self
    }

    /// Full path of the catalog file
    pub fn metadata_path(&self) -> PathBuf {
        metadata_path_in(&self.processed_documents_path)
    }
}

/// Read a path variable, falling back to `default` when it is unset
fn path_var(name: &str, default: &str) -> Result<PathBuf> {
    match std::env::var(name) {
        Ok(value) => Ok(PathBuf::from(value)),
        Err(VarError::NotPresent) => Ok(PathBuf::from(default)),
        Err(VarError::NotUnicode(value)) => Err(QuizError::config(format!(
            "{} is not valid UTF-8: {:?}",
            name, value
        ))),
    }
}

/// Catalog file location inside a processed directory
pub fn metadata_path_in(processed_dir: &Path) -> PathBuf {
    processed_dir.join(METADATA_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_paths() {
        let config = IngestConfig::default();
        assert_eq!(config.raw_documents_path, PathBuf::from("./data/raw"));
        assert_eq!(config.processed_documents_path, PathBuf::from("./data/processed"));
        assert!(!config.compute_checksums);
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        std::env::set_var(RAW_DOCUMENTS_PATH_VAR, "/srv/policies/raw");
        std::env::set_var(PROCESSED_DOCUMENTS_PATH_VAR, "/srv/policies/processed");

        let config = IngestConfig::from_env().unwrap();
        assert_eq!(config.raw_documents_path, PathBuf::from("/srv/policies/raw"));
        assert_eq!(config.processed_documents_path, PathBuf::from("/srv/policies/processed"));

        std::env::remove_var(RAW_DOCUMENTS_PATH_VAR);
        std::env::remove_var(PROCESSED_DOCUMENTS_PATH_VAR);
    }

    #[test]
    #[serial]
    fn test_config_from_env_falls_back_to_defaults() {
        std::env::remove_var(RAW_DOCUMENTS_PATH_VAR);
        std::env::remove_var(PROCESSED_DOCUMENTS_PATH_VAR);

        assert_eq!(IngestConfig::from_env().unwrap(), IngestConfig::default());
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_non_utf8_path_is_config_error() {
        use std::os::unix::ffi::OsStrExt;

        std::env::remove_var(PROCESSED_DOCUMENTS_PATH_VAR);
        std::env::set_var(RAW_DOCUMENTS_PATH_VAR, std::ffi::OsStr::from_bytes(b"/srv/\xffraw"));

        let result = IngestConfig::from_env();
        std::env::remove_var(RAW_DOCUMENTS_PATH_VAR);

        match result {
            Err(QuizError::Config(msg)) => assert!(msg.contains(RAW_DOCUMENTS_PATH_VAR)),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_overrides_and_metadata_path() {
        let config = IngestConfig::default()
            .with_raw_documents_path("manuals")
            .with_processed_documents_path("out")
            .with_checksums(true);

        assert_eq!(config.raw_documents_path, PathBuf::from("manuals"));
        assert!(config.compute_checksums);
        assert_eq!(config.metadata_path(), PathBuf::from("out").join("document_metadata.csv"));
    }
}
