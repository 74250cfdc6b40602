//! Document catalog
//!
//! The catalog is the table of every document found during a scan. It is
//! persisted as `document_metadata.csv` with one row per document and no
//! index column.

use policyquiz_common::checksum::digest_file;
use policyquiz_common::{DocumentRecord, QuizError, ResourceType, Result};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Columns written for every document, in order
pub const BASE_COLUMNS: [&str; 7] = [
    "policy_manual",
    "resource_type",
    "index",
    "name",
    "filename",
    "file_path",
    "extension",
];

/// Columns appended when checksums have been computed
pub const CHECKSUM_COLUMNS: [&str; 2] = ["size_bytes", "sha256"];

/// Ordered collection of document records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    documents: Vec<DocumentRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents(documents: Vec<DocumentRecord>) -> Self {
        Self { documents }
    }

    pub fn push(&mut self, record: DocumentRecord) {
        self.documents.push(record);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentRecord> {
        self.documents.iter()
    }

    pub fn into_documents(self) -> Vec<DocumentRecord> {
        self.documents
    }

    /// Whether any record carries checksum columns
    pub fn has_checksums(&self) -> bool {
        self.documents.iter().any(DocumentRecord::has_checksum)
    }

    /// Number of documents per policy manual, most documents first
    pub fn counts_by_manual(&self) -> Vec<(String, usize)> {
        value_counts(self.documents.iter().map(|d| d.policy_manual.clone()))
    }

    /// Number of documents per resource type, most documents first
    pub fn counts_by_resource_type(&self) -> Vec<(ResourceType, usize)> {
        value_counts(self.documents.iter().map(|d| d.resource_type))
    }

    /// Records matching both filters; `None` matches everything
    pub fn filter(&self, manual: Option<&str>, resource_type: Option<ResourceType>) -> Catalog {
        let documents = self
            .documents
            .iter()
            .filter(|d| manual.is_none_or(|m| d.policy_manual == m))
            .filter(|d| resource_type.is_none_or(|rt| d.resource_type == rt))
            .cloned()
            .collect();
        Catalog { documents }
    }

    /// Fill in size and SHA-256 for every record by reading its file
    pub fn with_checksums(mut self) -> Result<Self> {
        for record in &mut self.documents {
            let digest = digest_file(&record.file_path)?;
            debug!(
                file = %record.file_path.display(),
                sha256 = %digest.sha256,
                "Computed document checksum"
            );
            record.size_bytes = Some(digest.size_bytes);
            record.sha256 = Some(digest.sha256);
        }
        Ok(self)
    }

    /// Write the catalog as CSV to a file, replacing any existing file
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_to(file)
    }

    /// Write the catalog as CSV to any writer
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let with_checksums = self.has_checksums();
        let mut csv = csv::Writer::from_writer(writer);

        if with_checksums {
            csv.write_record(BASE_COLUMNS.iter().chain(CHECKSUM_COLUMNS.iter()))?;
        } else {
            csv.write_record(BASE_COLUMNS)?;
        }

        for record in &self.documents {
            let mut row = vec![
                record.policy_manual.clone(),
                record.resource_type.to_string(),
                record.index.clone(),
                record.name.clone(),
                record.filename.clone(),
                record.file_path.to_string_lossy().into_owned(),
                record.extension.clone(),
            ];
            if with_checksums {
                row.push(record.size_bytes.map(|s| s.to_string()).unwrap_or_default());
                row.push(record.sha256.clone().unwrap_or_default());
            }
            csv.write_record(&row)?;
        }

        csv.flush()?;
        Ok(())
    }

    /// Load a catalog previously written with [`Catalog::write_csv`]
    pub fn read_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(QuizError::CatalogNotFound(path.to_path_buf()));
        }
        let file = std::fs::File::open(path)?;
        Self::read_from(file)
    }

    /// Load a catalog from CSV on any reader
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        let mut csv = csv::Reader::from_reader(reader);
        let documents = csv
            .deserialize::<DocumentRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { documents })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a DocumentRecord;
    type IntoIter = std::slice::Iter<'a, DocumentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// Count occurrences, sorted by count descending then key ascending
fn value_counts<K: Ord>(values: impl Iterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut counts: Vec<(K, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(manual: &str, resource_type: ResourceType, filename: &str) -> DocumentRecord {
        DocumentRecord {
            policy_manual: manual.to_string(),
            resource_type,
            index: "01".to_string(),
            name: "Fall Prevention".to_string(),
            filename: filename.to_string(),
            file_path: PathBuf::from("raw")
                .join(manual)
                .join(resource_type.as_str())
                .join(filename),
            extension: "docx".to_string(),
            size_bytes: None,
            sha256: None,
        }
    }

    fn sample() -> Catalog {
        Catalog::from_documents(vec![
            record("Falls", ResourceType::Policy, "01_Fall_Prevention.docx"),
            record("Falls", ResourceType::Tools, "01_Risk_Tool.docx"),
            record("Falls", ResourceType::Tools, "02_Audit.docx"),
            record("Infection", ResourceType::Policy, "01_Hand_Hygiene.docx"),
            record("Wounds", ResourceType::Education, "01_Intro.docx"),
        ])
    }

    #[test]
    fn test_counts_sorted_by_frequency() {
        let catalog = sample();
        assert_eq!(
            catalog.counts_by_manual(),
            vec![
                ("Falls".to_string(), 3),
                ("Infection".to_string(), 1),
                ("Wounds".to_string(), 1),
            ]
        );
        assert_eq!(
            catalog.counts_by_resource_type(),
            vec![
                (ResourceType::Policy, 2),
                (ResourceType::Tools, 2),
                (ResourceType::Education, 1),
            ]
        );
    }

    #[test]
    fn test_filter() {
        let catalog = sample();
        assert_eq!(catalog.filter(Some("Falls"), None).len(), 3);
        assert_eq!(catalog.filter(None, Some(ResourceType::Policy)).len(), 2);
        assert_eq!(catalog.filter(Some("Falls"), Some(ResourceType::Tools)).len(), 2);
        assert!(catalog.filter(Some("Falls"), Some(ResourceType::Education)).is_empty());
        assert_eq!(catalog.filter(None, None), catalog);
    }

    #[test]
    fn test_csv_header_and_index_kept_as_text() {
        let catalog = Catalog::from_documents(vec![record(
            "Falls",
            ResourceType::Policy,
            "01_Fall_Prevention.docx",
        )]);

        let mut buffer = Vec::new();
        catalog.write_to(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("policy_manual,resource_type,index,name,filename,file_path,extension")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("Falls,Policy,01,Fall Prevention,01_Fall_Prevention.docx,"));
        assert!(row.ends_with(",docx"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_read_back() {
        let catalog = sample();
        let mut buffer = Vec::new();
        catalog.write_to(&mut buffer).unwrap();

        let loaded = Catalog::read_from(buffer.as_slice()).unwrap();
        assert_eq!(loaded, catalog);
        assert!(!loaded.has_checksums());
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let mut rec = record("Falls", ResourceType::Policy, "01_Falls,_Slips.docx");
        rec.name = "Falls, Slips".to_string();
        let catalog = Catalog::from_documents(vec![rec]);

        let mut buffer = Vec::new();
        catalog.write_to(&mut buffer).unwrap();
        assert!(String::from_utf8_lossy(&buffer).contains("\"Falls, Slips\""));

        let loaded = Catalog::read_from(buffer.as_slice()).unwrap();
        assert_eq!(loaded.documents()[0].name, "Falls, Slips");
    }

    #[test]
    fn test_read_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::read_csv(dir.path().join("document_metadata.csv")).unwrap_err();
        assert!(matches!(err, QuizError::CatalogNotFound(_)));
    }

    #[test]
    fn test_with_checksums_adds_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("01_Policy.docx");
        std::fs::write(&path, b"hello world").unwrap();

        let mut rec = record("Falls", ResourceType::Policy, "01_Policy.docx");
        rec.file_path = path;
        let catalog = Catalog::from_documents(vec![rec]).with_checksums().unwrap();

        let doc = &catalog.documents()[0];
        assert_eq!(doc.size_bytes, Some(11));
        assert_eq!(
            doc.sha256.as_deref(),
            Some("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9")
        );

        let mut buffer = Vec::new();
        catalog.write_to(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with(
            "policy_manual,resource_type,index,name,filename,file_path,extension,size_bytes,sha256\n"
        ));

        let loaded = Catalog::read_from(text.as_bytes()).unwrap();
        assert_eq!(loaded, catalog);
    }
}
