//! Count data: the records the view displays and their totals.
//!
//! - **Records**: `FileRecord` and its `CountResult`, produced externally
//! - **Aggregate**: field-wise sums shown in the total row
//!
//! ## Example
//!
//! ```rust
//! use sourcecountlib::data::{Aggregate, CountResult, FileType};
//!
//! let results = vec![
//!     CountResult::new(FileType::known("python")).with_lines(8, 0, 1, 1),
//!     CountResult::unknown(512),
//! ];
//! let total = Aggregate::from_results(&results);
//! assert_eq!(total.total, 10);
//! assert_eq!(total.file_size, 512);
//! ```

pub mod aggregate;
pub mod record;

pub use aggregate::Aggregate;
pub use record::{CountResult, FileRecord, FileType, UNKNOWN_TYPE};
