//! Source of records: what the view shows.
//!
//! - **Snapshot loading**: read records produced by a counting engine
//! - **Selection**: a hierarchical `ResultTree` that decides which records
//!   are in scope, narrowed by include/exclude glob patterns
//!
//! ## Example
//!
//! ```rust
//! use sourcecountlib::source::{parse_snapshot, FilterConfig, ResultTree, Selector};
//!
//! let records = parse_snapshot(
//!     r#"[{"resource_path": "/p/src/a.py", "type": "python", "total": 3},
//!         {"resource_path": "/p/doc/b.md", "type": "Unknown"}]"#,
//!     "inline",
//! )?;
//! let mut tree = ResultTree::new(records).with_filter(FilterConfig::new().include("**/*.py")?);
//! tree.select("/p");
//! assert_eq!(tree.descendants().len(), 1);
//! # Ok::<(), sourcecountlib::SourceCountError>(())
//! ```

pub mod filter;
pub mod snapshot;
pub mod tree;

pub use filter::FilterConfig;
pub use snapshot::{load_snapshot, parse_snapshot};
pub use tree::{ResultTree, Selector};
