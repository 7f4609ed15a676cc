//! # sourcecountlib
//!
//! A sortable, aggregated table over per-file source count results.
//!
//! ## Overview
//!
//! A counting engine produces one [`FileRecord`] per source file: its type,
//! size, and statement/document/comment/empty/total line counts. Files whose
//! type is unknown (binaries, unrecognized formats) carry no usable metrics.
//! This library takes the records under a hierarchical selection and
//! presents them as a table:
//!
//! - **Selection**: a [`ResultTree`] puts every record under a node in scope
//! - **Aggregation**: a total row with field-wise sums and distinct counts
//! - **Sorting**: click-to-sort columns with toggling direction; unknown-type
//!   records cluster at one end of every metric sort
//! - **Redraw**: full rebuild on scope change, in-place update on re-sort
//! - **Export**: tab-separated text of the selected rows for the clipboard
//!
//! The data flow is:
//! 1. Source (snapshot loading, hierarchical selection)
//! 2. Data (records and their aggregate)
//! 3. Query (column definitions, stable sort)
//! 4. Output (rendered rows, presentation surface, export)
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use sourcecountlib::{ColumnId, CountResult, FileRecord, FileType, MemorySurface, ResultView};
//!
//! let records = vec![
//!     Rc::new(FileRecord::new("/p/a.py", CountResult::new(FileType::known("python")).with_total(10))),
//!     Rc::new(FileRecord::new("/p/b.bin", CountResult::unknown(2048))),
//!     Rc::new(FileRecord::new("/p/c.py", CountResult::new(FileType::known("python")).with_total(5))),
//! ];
//!
//! let mut view = ResultView::new(MemorySurface::new());
//! view.set_scope(records);
//! view.set_sort(ColumnId::Total);
//!
//! let names: Vec<&str> = view.records().iter().map(|r| r.name()).collect();
//! assert_eq!(names, ["b.bin", "c.py", "a.py"]);
//! assert_eq!(view.aggregate().total, 15);
//!
//! let text = view.export([0, 1]);
//! assert_eq!(text.lines().count(), 3);
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod query;
pub mod source;
pub mod view;

pub use data::{Aggregate, CountResult, FileRecord, FileType, UNKNOWN_TYPE};
pub use error::SourceCountError;
pub use options::ViewOptions;
pub use output::{
    ClipboardSink, Confirmation, EditorOpener, FixedAnswer, MemoryClipboard, MemorySurface,
    PresentationSurface, RenderedRow, TableRow, ViewTable,
};
pub use query::{ColumnId, SortDirection, SortKey, SortSpec};
pub use source::{load_snapshot, parse_snapshot, FilterConfig, ResultTree, Selector};
pub use view::{Redraw, ResultView};

/// Result type for sourcecountlib operations
pub type Result<T> = std::result::Result<T, SourceCountError>;
