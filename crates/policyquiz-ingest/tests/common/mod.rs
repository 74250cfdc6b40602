//! Shared fixtures for ingestion tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write `contents` to `root/relative`, creating parent directories
pub fn touch(root: &Path, relative: &str, contents: &[u8]) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("fixture path has a parent")).expect("create dirs");
    fs::write(&path, contents).expect("write fixture file");
    path
}

/// A raw documents tree with two valid manuals and assorted noise:
///
/// - `Falls_Prevention`: Policy (1), Tools (2), Education (1), a stray `Drafts` folder
/// - `Infection_Control`: Procedures (1 conventional, 1 unconventional name)
/// - `Archive`: no resource type folders, skipped
/// - `notes.txt` at the root, ignored
pub fn sample_tree() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = dir.path();

    touch(root, "Falls_Prevention/Policy/01_Fall_Prevention_Policy.docx", b"policy");
    touch(root, "Falls_Prevention/Tools/02_Morse_Scale.PDF", b"tool two");
    touch(root, "Falls_Prevention/Tools/01_Risk_Checklist.pdf", b"tool one");
    touch(root, "Falls_Prevention/Education/01_Falls_101.pptx", b"education");
    touch(root, "Falls_Prevention/Drafts/03_Unfinished.docx", b"draft");
    touch(root, "Infection_Control/Procedures/01_Hand_Hygiene.pptx", b"procedure");
    touch(root, "Infection_Control/Procedures/Outbreak_Guide.DOCX", b"guide");
    touch(root, "Archive/old/01_Old_Policy.docx", b"old");
    touch(root, "notes.txt", b"not a manual");

    dir
}
