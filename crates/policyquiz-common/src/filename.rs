//! Document filename parsing
//!
//! Policy documents are expected to be named `<digits>_<Name_With_Underscores>.<ext>`,
//! e.g. `01_Fall_Prevention.docx`. Files that do not follow the convention are
//! still catalogued with index `"0"` and their plain stem as the name.

use crate::error::Result;
use regex::Regex;

/// Naming convention: leading digits, underscore, name, last dot, extension.
pub const DOCUMENT_FILENAME_PATTERN: &str = r"^(\d+)_(.*)\.(.*)";

/// Index assigned to files that do not follow the naming convention
pub const UNINDEXED: &str = "0";

/// Metadata derived from a document's filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    pub index: String,
    pub name: String,
    pub extension: String,
}

/// Compiled filename parser, reusable across a whole scan
#[derive(Debug, Clone)]
pub struct FilenameParser {
    pattern: Regex,
}

impl FilenameParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(DOCUMENT_FILENAME_PATTERN)?,
        })
    }

    /// Derive index, name and extension from a filename
    pub fn parse(&self, filename: &str) -> ParsedFilename {
        if let Some(caps) = self.pattern.captures(filename) {
            let group = |i| caps.get(i).map_or("", |m| m.as_str());
            return ParsedFilename {
                index: group(1).to_string(),
                name: group(2).replace('_', " "),
                extension: group(3).to_lowercase(),
            };
        }

        let (stem, extension) = split_extension(filename);
        ParsedFilename {
            index: UNINDEXED.to_string(),
            name: stem.to_string(),
            extension: extension.to_lowercase(),
        }
    }
}

/// Parse a single filename. Prefer [`FilenameParser`] when parsing many.
pub fn parse_document_filename(filename: &str) -> Result<ParsedFilename> {
    Ok(FilenameParser::new()?.parse(filename))
}

/// Split a filename into stem and extension (without the dot).
///
/// The split happens at the last dot, unless only dots precede it, so
/// `.hidden` has no extension while `notes.` has an empty one.
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(dot) if filename[..dot].chars().any(|c| c != '.') => {
            (&filename[..dot], &filename[dot + 1..])
        },
        _ => (filename, ""),
    }
}
