//! Count records as produced by an external counting engine.
//!
//! A [`FileRecord`] pairs a resource handle with its [`CountResult`]. The
//! view never recomputes these values; it only sorts, sums and renders them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for the unknown-type sentinel, both on the wire and on screen.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Source type of a counted file.
///
/// `Unknown` means no line metric is computable for the file (binary or
/// unrecognized content). Its five line-metric fields carry no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum FileType {
    /// A recognized source type (e.g. "Java", "python")
    Known(String),
    /// No metric is computable for this file
    #[default]
    Unknown,
}

impl FileType {
    /// Create a known type.
    pub fn known(name: impl Into<String>) -> Self {
        FileType::Known(name.into())
    }

    /// Check for the unknown sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, FileType::Unknown)
    }

    /// Display label ("Unknown" for the sentinel).
    pub fn as_str(&self) -> &str {
        match self {
            FileType::Known(name) => name,
            FileType::Unknown => UNKNOWN_TYPE,
        }
    }
}

impl From<Option<String>> for FileType {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(name) if name != UNKNOWN_TYPE => FileType::Known(name),
            _ => FileType::Unknown,
        }
    }
}

impl From<FileType> for String {
    fn from(value: FileType) -> Self {
        match value {
            FileType::Known(name) => name,
            FileType::Unknown => UNKNOWN_TYPE.to_string(),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line counts for a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    /// Source type, or the unknown sentinel
    #[serde(rename = "type", default)]
    pub file_type: FileType,
    /// File size in bytes
    #[serde(default)]
    pub file_size: u64,
    /// Statement (logic) lines
    #[serde(default)]
    pub statement: u64,
    /// Documentation comment lines
    #[serde(default)]
    pub document: u64,
    /// Regular comment lines
    #[serde(default)]
    pub comment: u64,
    /// Empty lines
    #[serde(default)]
    pub empty: u64,
    /// Total line count
    #[serde(default)]
    pub total: u64,
    /// Absolute path on disk, when the counter resolved one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_path: Option<String>,
}

impl CountResult {
    /// Create an empty result of the given type.
    pub fn new(file_type: FileType) -> Self {
        Self {
            file_type,
            ..Self::default()
        }
    }

    /// Create a result for a file whose metrics are not computable.
    pub fn unknown(file_size: u64) -> Self {
        Self {
            file_size,
            ..Self::new(FileType::Unknown)
        }
    }

    /// Builder: set the file size
    pub fn with_file_size(mut self, file_size: u64) -> Self {
        self.file_size = file_size;
        self
    }

    /// Builder: set the line metrics; `total` is their sum.
    pub fn with_lines(mut self, statement: u64, document: u64, comment: u64, empty: u64) -> Self {
        self.statement = statement;
        self.document = document;
        self.comment = comment;
        self.empty = empty;
        self.total = statement
            .saturating_add(document)
            .saturating_add(comment)
            .saturating_add(empty);
        self
    }

    /// Builder: override the total line count
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    /// Builder: set the absolute path
    pub fn with_absolute_path(mut self, path: impl Into<String>) -> Self {
        self.absolute_path = Some(path.into());
        self
    }

    /// Whether the five line metrics are meaningful.
    pub fn has_metrics(&self) -> bool {
        !self.file_type.is_unknown()
    }
}

/// One counted source artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Workspace-style handle with `/` separators (e.g. `/project/src/Main.java`)
    pub resource_path: String,
    /// Metrics for the file
    #[serde(flatten)]
    pub result: CountResult,
}

impl FileRecord {
    /// Create a record.
    pub fn new(resource_path: impl Into<String>, result: CountResult) -> Self {
        Self {
            resource_path: resource_path.into(),
            result,
        }
    }

    /// Last segment of the resource path.
    pub fn name(&self) -> &str {
        self.resource_path
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or("")
    }

    /// Extension of the file name, without the dot.
    ///
    /// Dotfiles such as `.gitignore` have no extension.
    pub fn extension(&self) -> Option<&str> {
        let name = self.name();
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }
}

impl AsRef<FileRecord> for FileRecord {
    fn as_ref(&self) -> &FileRecord {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_extension() {
        let record = FileRecord::new("/proj/src/Main.java", CountResult::default());
        assert_eq!(record.name(), "Main.java");
        assert_eq!(record.extension(), Some("java"));
    }

    #[test]
    fn test_extension_missing() {
        let makefile = FileRecord::new("/proj/Makefile", CountResult::default());
        assert_eq!(makefile.extension(), None);

        let dotfile = FileRecord::new("/proj/.gitignore", CountResult::default());
        assert_eq!(dotfile.name(), ".gitignore");
        assert_eq!(dotfile.extension(), None);
    }

    #[test]
    fn test_with_lines_sets_total() {
        let result = CountResult::new(FileType::known("Rust")).with_lines(10, 2, 3, 4);
        assert_eq!(result.total, 19);
        assert!(result.has_metrics());
    }

    #[test]
    fn test_unknown_has_no_metrics() {
        let result = CountResult::unknown(2048);
        assert_eq!(result.file_size, 2048);
        assert!(!result.has_metrics());
        assert_eq!(result.file_type.as_str(), "Unknown");
    }

    #[test]
    fn test_file_type_serde() {
        let json = r#"[
            {"resource_path": "/p/a.py", "type": "python", "total": 10},
            {"resource_path": "/p/b.bin", "type": "Unknown"},
            {"resource_path": "/p/c", "type": null},
            {"resource_path": "/p/d"}
        ]"#;
        let records: Vec<FileRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].result.file_type, FileType::known("python"));
        assert_eq!(records[0].result.total, 10);
        assert!(records[1].result.file_type.is_unknown());
        assert!(records[2].result.file_type.is_unknown());
        assert!(records[3].result.file_type.is_unknown());

        let out = serde_json::to_value(&records[1]).unwrap();
        assert_eq!(out["type"], "Unknown");
        assert!(out.get("absolute_path").is_none());
    }
}
