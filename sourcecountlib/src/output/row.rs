//! Row rendering: turn records and totals into columnar cell text.
//!
//! Rows are rendered in [`ColumnId::ALL`] order. The last row of a rendered
//! table is always the total row, which carries counts for the non-metric
//! columns and the aggregate's sums for the numeric ones.

use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::rc::Rc;

use crate::data::{Aggregate, FileRecord, FileType};
use crate::options::ViewOptions;
use crate::query::ColumnId;

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    /// Cell text, one per column
    pub cells: Vec<String>,
    /// Record behind a data row; `None` for the total row
    #[serde(serialize_with = "serialize_record_path")]
    pub record: Option<Rc<FileRecord>>,
}

fn serialize_record_path<S: Serializer>(
    record: &Option<Rc<FileRecord>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match record {
        Some(record) => serializer.serialize_some(&record.resource_path),
        None => serializer.serialize_none(),
    }
}

impl RenderedRow {
    /// Whether this is the total row.
    pub fn is_total(&self) -> bool {
        self.record.is_none()
    }

    /// Cell text for a column.
    pub fn cell(&self, column: ColumnId) -> &str {
        self.cells
            .get(column.index())
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Render one data row.
pub fn render_record(record: &Rc<FileRecord>, options: &ViewOptions) -> RenderedRow {
    let result = &record.result;

    let mut cells = vec![
        record.name().to_string(),
        record.resource_path.clone(),
        result.absolute_path.clone().unwrap_or_default(),
        record.extension().unwrap_or("").to_string(),
        result.file_type.to_string(),
        result.file_size.to_string(),
    ];

    if result.has_metrics() {
        cells.extend([
            result.statement.to_string(),
            result.document.to_string(),
            result.comment.to_string(),
            result.empty.to_string(),
            result.total.to_string(),
        ]);
    } else {
        cells.extend(std::iter::repeat(options.placeholder.clone()).take(5));
    }

    RenderedRow {
        cells,
        record: Some(Rc::clone(record)),
    }
}

/// Render the trailing total row.
///
/// `extension_count` and `type_count` are the sizes of the distinct sets
/// observed while rendering the data rows.
pub fn render_total(
    record_count: usize,
    extension_count: usize,
    type_count: usize,
    aggregate: &Aggregate,
    options: &ViewOptions,
) -> RenderedRow {
    let cells = vec![
        options.total_label.clone(),
        // Resource count
        record_count.to_string(),
        // File count
        record_count.to_string(),
        extension_count.to_string(),
        type_count.to_string(),
        aggregate.file_size.to_string(),
        aggregate.statement.to_string(),
        aggregate.document.to_string(),
        aggregate.comment.to_string(),
        aggregate.empty.to_string(),
        aggregate.total.to_string(),
    ];

    RenderedRow {
        cells,
        record: None,
    }
}

/// Render all data rows in order, followed by the total row.
///
/// Extensions are compared case-insensitively; a missing extension counts as
/// one distinct value. The unknown type counts as a distinct type.
pub fn render_rows(
    records: &[Rc<FileRecord>],
    aggregate: &Aggregate,
    options: &ViewOptions,
) -> Vec<RenderedRow> {
    let mut extensions: HashSet<Option<String>> = HashSet::new();
    let mut types: HashSet<&FileType> = HashSet::new();
    let mut rows = Vec::with_capacity(records.len() + 1);

    for record in records {
        extensions.insert(record.extension().map(str::to_lowercase));
        types.insert(&record.result.file_type);
        rows.push(render_record(record, options));
    }

    rows.push(render_total(
        records.len(),
        extensions.len(),
        types.len(),
        aggregate,
        options,
    ));

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CountResult;

    fn record(path: &str, result: CountResult) -> Rc<FileRecord> {
        Rc::new(FileRecord::new(path, result))
    }

    #[test]
    fn test_render_known_record() {
        let rec = record(
            "/proj/src/Main.java",
            CountResult::new(FileType::known("Java"))
                .with_file_size(1200)
                .with_lines(30, 10, 5, 8)
                .with_absolute_path("/home/dev/proj/src/Main.java"),
        );
        let row = render_record(&rec, &ViewOptions::default());

        assert_eq!(
            row.cells,
            vec![
                "Main.java",
                "/proj/src/Main.java",
                "/home/dev/proj/src/Main.java",
                "java",
                "Java",
                "1200",
                "30",
                "10",
                "5",
                "8",
                "53"
            ]
        );
        assert!(!row.is_total());
    }

    #[test]
    fn test_render_unknown_record_uses_placeholder() {
        let rec = record("/proj/logo.png", CountResult::unknown(4096).with_total(77));
        let row = render_record(&rec, &ViewOptions::default());

        assert_eq!(row.cell(ColumnId::Type), "Unknown");
        assert_eq!(row.cell(ColumnId::FileSize), "4096");
        assert_eq!(row.cell(ColumnId::FilePath), "");
        for column in ColumnId::ALL.iter().copied().filter(|c| c.is_metric()) {
            assert_eq!(row.cell(column), "---");
        }
    }

    #[test]
    fn test_custom_placeholder() {
        let rec = record("/proj/logo.png", CountResult::unknown(1));
        let row = render_record(&rec, &ViewOptions::new().placeholder("n/a"));
        assert_eq!(row.cell(ColumnId::Total), "n/a");
    }

    #[test]
    fn test_total_row_counts_distinct_values() {
        let records = vec![
            record(
                "/p/a.py",
                CountResult::new(FileType::known("python")).with_total(10),
            ),
            record("/p/b.bin", CountResult::unknown(0)),
            record(
                "/p/C.PY",
                CountResult::new(FileType::known("python")).with_total(5),
            ),
            record("/p/Makefile", CountResult::unknown(0)),
        ];
        let aggregate = Aggregate::from_results(records.iter().map(|r| &r.result));
        let rows = render_rows(&records, &aggregate, &ViewOptions::default());

        assert_eq!(rows.len(), 5);
        let total = rows.last().unwrap();
        assert!(total.is_total());
        assert_eq!(total.cell(ColumnId::Name), "Total");
        assert_eq!(total.cell(ColumnId::ResourcePath), "4");
        assert_eq!(total.cell(ColumnId::FilePath), "4");
        // py, bin, and no extension
        assert_eq!(total.cell(ColumnId::Extension), "3");
        // python, Unknown
        assert_eq!(total.cell(ColumnId::Type), "2");
        assert_eq!(total.cell(ColumnId::Total), "15");
    }

    #[test]
    fn test_render_rows_empty() {
        let rows = render_rows(&[], &Aggregate::new(), &ViewOptions::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].cells,
            vec!["Total", "0", "0", "0", "0", "0", "0", "0", "0", "0", "0"]
        );
    }
}
