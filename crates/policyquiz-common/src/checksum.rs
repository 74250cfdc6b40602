//! Checksum utilities for catalogued documents

use crate::error::Result;
use sha2::{Digest, Sha256};
use std::io::Read;
use std::path::Path;

/// Size and content digest of a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDigest {
    pub size_bytes: u64,
    pub sha256: String,
}

/// Compute the SHA-256 digest and size of a file
pub fn digest_file(path: impl AsRef<Path>) -> Result<FileDigest> {
    let mut file = std::fs::File::open(path)?;
    digest_reader(&mut file)
}

/// Compute the SHA-256 checksum of a file
pub fn compute_file_checksum(path: impl AsRef<Path>) -> Result<String> {
    Ok(digest_file(path)?.sha256)
}

/// Compute the SHA-256 digest and byte count of any readable source
pub fn digest_reader<R: Read>(reader: &mut R) -> Result<FileDigest> {
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    let mut size_bytes = 0u64;

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
        size_bytes += bytes_read as u64;
    }

    Ok(FileDigest {
        size_bytes,
        sha256: hex::encode(hasher.finalize()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_digest_reader_sha256() {
        let mut cursor = Cursor::new(b"hello world");
        let digest = digest_reader(&mut cursor).unwrap();
        assert_eq!(
            digest.sha256,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
        assert_eq!(digest.size_bytes, 11);
    }

    #[test]
    fn test_digest_empty_input() {
        let mut cursor = Cursor::new(b"");
        let digest = digest_reader(&mut cursor).unwrap();
        assert_eq!(
            digest.sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(digest.size_bytes, 0);
    }

    #[test]
    fn test_compute_file_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("01_Policy.docx");
        std::fs::write(&path, b"hello world").unwrap();

        let checksum = compute_file_checksum(&path).unwrap();
        assert_eq!(
            checksum,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = digest_file(dir.path().join("missing.pdf")).unwrap_err();
        assert!(matches!(err, crate::QuizError::Io(_)));
    }
}
