//! Raw document discovery
//!
//! Walks the raw documents directory, which is laid out as:
//!
//! ```text
//! root/
//!     policy_manual_1/
//!         Policy/01_Policy_Name.docx
//!         Procedures/01_Procedure_Name.pptx
//!         Tools/01_Tool_Name.pdf
//!         Education/01_Education_Resource.pptx
//!     policy_manual_2/
//!         ...
//! ```
//!
//! Only the first three levels are visited. Manuals without any recognised
//! resource type folder are skipped. Entries are visited in name order and
//! resource types in canonical order, so repeated scans produce the same
//! catalog.

use crate::catalog::Catalog;
use policyquiz_common::filename::FilenameParser;
use policyquiz_common::{DocumentRecord, QuizError, ResourceType, Result};
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};
use walkdir::{DirEntry, WalkDir};

/// Scan `root` and build a catalog of every policy document found
#[instrument(skip_all, fields(root = %root.as_ref().display()))]
pub fn process_policy_documents(root: impl AsRef<Path>) -> Result<Catalog> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(QuizError::RootNotFound(root.to_path_buf()));
    }

    info!("Processing documents from: {}", root.display());

    let parser = FilenameParser::new()?;
    let manuals: Vec<DirEntry> = child_entries(root)?
        .into_iter()
        .filter(|e| e.file_type().is_dir())
        .collect();

    info!("Found {} potential policy manuals", manuals.len());

    let mut catalog = Catalog::new();

    for manual in &manuals {
        let manual_name = entry_name(manual);
        let resource_types = resource_type_folders(manual.path())?;

        if resource_types.is_empty() {
            warn!(
                manual = %manual_name,
                "Skipping {} - no valid resource type folders found",
                manual_name
            );
            continue;
        }

        let type_names: Vec<&str> = resource_types.iter().map(|(rt, _)| rt.as_str()).collect();
        info!(
            "Processing {} with resource types: {:?}",
            manual_name, type_names
        );

        for (resource_type, folder) in &resource_types {
            for file in child_entries(folder)?.into_iter().filter(|e| e.file_type().is_file()) {
                let filename = entry_name(&file);
                let parsed = parser.parse(&filename);

                info!("  Added: {}/{}/{}", manual_name, resource_type, filename);

                catalog.push(DocumentRecord {
                    policy_manual: manual_name.clone(),
                    resource_type: *resource_type,
                    index: parsed.index,
                    name: parsed.name,
                    filename,
                    file_path: file.path().to_path_buf(),
                    extension: parsed.extension,
                    size_bytes: None,
                    sha256: None,
                });
            }
        }
    }

    info!(documents = catalog.len(), "Scan finished");
    Ok(catalog)
}

/// Resource type folders inside a manual, in canonical order
fn resource_type_folders(manual: &Path) -> Result<Vec<(ResourceType, PathBuf)>> {
    let mut folders: Vec<(ResourceType, PathBuf)> = child_entries(manual)?
        .into_iter()
        .filter(|e| e.file_type().is_dir())
        .filter_map(|e| {
            entry_name(&e)
                .parse::<ResourceType>()
                .ok()
                .map(|rt| (rt, e.into_path()))
        })
        .collect();
    folders.sort_by_key(|(rt, _)| *rt);
    Ok(folders)
}

/// Direct children of `dir`, sorted by name, with symlinks resolved.
///
/// Children that cannot be read (such as dangling symlinks) are logged and
/// left out; failing to read `dir` itself is an error.
fn child_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(err) if err.depth() > 0 => {
                warn!(
                    path = ?err.path(),
                    error = %err,
                    "Ignoring unreadable directory entry"
                );
            },
            Err(err) => return Err(QuizError::Io(err.into())),
        }
    }

    Ok(entries)
}

/// File name of an entry as text; non UTF-8 bytes are replaced
fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().into_owned()
}
