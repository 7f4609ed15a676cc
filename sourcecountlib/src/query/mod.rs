//! Query processing: column definitions and sorting.
//!
//! - **Options**: the fixed column set (`ColumnId`) and sort state (`SortSpec`)
//! - **Sort**: typed key extraction and the stable record sort
//!
//! ## Example
//!
//! ```rust
//! use sourcecountlib::data::{CountResult, FileRecord, FileType};
//! use sourcecountlib::query::{sort_records, ColumnId, SortSpec};
//!
//! let mut records = vec![
//!     FileRecord::new("/p/a.py", CountResult::new(FileType::known("python")).with_total(10)),
//!     FileRecord::new("/p/b.bin", CountResult::unknown(0)),
//!     FileRecord::new("/p/c.py", CountResult::new(FileType::known("python")).with_total(5)),
//! ];
//! sort_records(&mut records, &SortSpec::by(ColumnId::Total));
//! assert_eq!(records[0].name(), "b.bin");
//! assert_eq!(records[2].name(), "a.py");
//! ```

pub mod options;
pub mod sort;

pub use options::{ColumnId, SortDirection, SortSpec};
pub use sort::{compare_records, sort_records, SortKey};
