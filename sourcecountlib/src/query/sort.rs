//! Column-driven ordering of count records.
//!
//! Each column maps to a typed key through an exhaustive dispatch. The
//! records are ordered with a single stable sort, so records with equal keys
//! keep the order they had before the sort (the previously displayed order).

use std::cmp::Ordering;

use crate::data::FileRecord;

use super::options::{ColumnId, SortDirection, SortSpec};

/// Sort key extracted from a record for one column.
///
/// All records yield the same variant for a given column, so comparisons
/// never cross variants in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey<'a> {
    /// Text column
    Text(&'a str),
    /// Optional text column; absent values order below present ones
    OptionalText(Option<&'a str>),
    /// Numeric column
    Int(u64),
    /// Line metric; `None` for unknown-type records, which orders below
    /// every real count (the equivalent of a -1 key)
    Metric(Option<u64>),
}

fn metric_key(record: &FileRecord, value: u64) -> SortKey<'_> {
    SortKey::Metric(record.result.has_metrics().then_some(value))
}

impl ColumnId {
    /// Extract this column's sort key from a record.
    pub fn sort_key(self, record: &FileRecord) -> SortKey<'_> {
        let result = &record.result;
        match self {
            ColumnId::Name => SortKey::Text(record.name()),
            ColumnId::ResourcePath => SortKey::Text(&record.resource_path),
            ColumnId::FilePath => SortKey::OptionalText(result.absolute_path.as_deref()),
            ColumnId::Extension => SortKey::Text(record.extension().unwrap_or("")),
            ColumnId::Type => SortKey::Text(result.file_type.as_str()),
            ColumnId::FileSize => SortKey::Int(result.file_size),
            ColumnId::Statement => metric_key(record, result.statement),
            ColumnId::Document => metric_key(record, result.document),
            ColumnId::Comment => metric_key(record, result.comment),
            ColumnId::Empty => metric_key(record, result.empty),
            ColumnId::Total => metric_key(record, result.total),
        }
    }
}

/// Compare two records under a sort spec.
pub fn compare_records(a: &FileRecord, b: &FileRecord, spec: &SortSpec) -> Ordering {
    let ordering = spec.column.sort_key(a).cmp(&spec.column.sort_key(b));
    match spec.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Sort records in place.
///
/// Descending order reverses the comparison rather than the sorted slice,
/// which keeps ties in their prior relative order in both directions.
pub fn sort_records<R: AsRef<FileRecord>>(records: &mut [R], spec: &SortSpec) {
    records.sort_by(|a, b| compare_records(a.as_ref(), b.as_ref(), spec));
}
