//! Loading count records produced by an external counting engine.
//!
//! A snapshot is a JSON array of records:
//!
//! ```json
//! [
//!   {"resource_path": "/proj/src/a.py", "type": "python", "file_size": 120,
//!    "statement": 8, "document": 1, "comment": 0, "empty": 1, "total": 10,
//!    "absolute_path": "/home/dev/proj/src/a.py"},
//!   {"resource_path": "/proj/logo.png", "type": "Unknown", "file_size": 4096}
//! ]
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::data::FileRecord;
use crate::error::SourceCountError;
use crate::Result;

/// Parse snapshot JSON text. `origin` names the source in error messages.
pub fn parse_snapshot(content: &str, origin: impl AsRef<Path>) -> Result<Vec<FileRecord>> {
    serde_json::from_str(content).map_err(|source| SourceCountError::Snapshot {
        path: origin.as_ref().to_path_buf(),
        source,
    })
}

/// Read and parse a snapshot file.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Vec<FileRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SourceCountError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_snapshot(&content, path)?;
    debug!(path = %path.display(), records = records.len(), "loaded snapshot");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"[
        {"resource_path": "/proj/src/a.py", "type": "python", "file_size": 120,
         "statement": 8, "document": 1, "comment": 0, "empty": 1, "total": 10,
         "absolute_path": "/home/dev/proj/src/a.py"},
        {"resource_path": "/proj/logo.png", "type": "Unknown", "file_size": 4096}
    ]"#;

    #[test]
    fn test_load_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("counts.json");
        fs::write(&path, SAMPLE).unwrap();

        let records = load_snapshot(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "a.py");
        assert_eq!(records[0].result.total, 10);
        assert_eq!(
            records[0].result.absolute_path.as_deref(),
            Some("/home/dev/proj/src/a.py")
        );
        assert!(records[1].result.file_type.is_unknown());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_snapshot("/nonexistent/counts.json");
        assert!(matches!(result, Err(SourceCountError::FileRead { .. })));
    }

    #[test]
    fn test_parse_invalid_snapshot() {
        let result = parse_snapshot("{\"not\": \"a list\"}", "inline");
        match result {
            Err(SourceCountError::Snapshot { path, .. }) => {
                assert_eq!(path, Path::new("inline"));
            }
            other => panic!("Expected Snapshot error, got {:?}", other),
        }
    }
}
