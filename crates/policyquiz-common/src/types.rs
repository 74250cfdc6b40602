//! Common types used across the policy quiz workspace

use crate::error::QuizError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of resource a policy manual folder can hold.
///
/// Folder names are matched case-sensitively against the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceType {
    Policy,
    Procedures,
    Tools,
    Education,
}

impl ResourceType {
    /// All resource types in canonical order
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Policy,
        ResourceType::Procedures,
        ResourceType::Tools,
        ResourceType::Education,
    ];

    /// Folder name used on disk
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Policy => "Policy",
            ResourceType::Procedures => "Procedures",
            ResourceType::Tools => "Tools",
            ResourceType::Education => "Education",
        }
    }
}

impl std::str::FromStr for ResourceType {
    type Err = QuizError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|rt| rt.as_str() == s)
            .ok_or_else(|| QuizError::InvalidResourceType(s.to_string()))
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one catalogued policy document.
///
/// Field order matches the column order of `document_metadata.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Name of the policy manual directory
    pub policy_manual: String,

    /// Resource type folder the document lives in
    pub resource_type: ResourceType,

    /// Leading number of the filename, kept as text (`"01"`)
    pub index: String,

    /// Human readable document name
    pub name: String,

    /// File name on disk
    pub filename: String,

    /// Path of the document, rooted at the scanned directory
    pub file_path: PathBuf,

    /// Lower-cased extension without the dot
    pub extension: String,

    /// File size, only present when checksums were computed
    #[serde(default)]
    pub size_bytes: Option<u64>,

    /// SHA-256 of the file contents, only present when checksums were computed
    #[serde(default)]
    pub sha256: Option<String>,
}

impl DocumentRecord {
    /// Whether checksum columns have been filled in
    pub fn has_checksum(&self) -> bool {
        self.sha256.is_some()
    }
}
