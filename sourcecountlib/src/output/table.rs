//! Serializable snapshot of the rendered table.
//!
//! `ViewTable` is the final data structure before presentation outside the
//! engine: JSON output and text templates consume headers, rows and footer
//! without further computation.

use serde::{Deserialize, Serialize};

use super::row::RenderedRow;
use crate::query::{ColumnId, SortSpec};

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// First cell (file name, or the total label)
    pub label: String,
    /// Remaining cells, in column order
    pub values: Vec<String>,
}

impl From<&RenderedRow> for TableRow {
    fn from(row: &RenderedRow) -> Self {
        let mut cells = row.cells.iter().cloned();
        TableRow {
            label: cells.next().unwrap_or_default(),
            values: cells.collect(),
        }
    }
}

/// Table-ready snapshot of the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewTable {
    /// Column headers, in display order
    pub headers: Vec<String>,
    /// Active sort
    pub sort: SortSpec,
    /// Data rows
    pub rows: Vec<TableRow>,
    /// Total row; absent when nothing is displayed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<TableRow>,
}

impl ViewTable {
    /// Build a table from rendered rows, where the last row is the total row.
    pub fn from_rendered(rows: &[RenderedRow], sort: SortSpec) -> Self {
        let (data, footer) = match rows.split_last() {
            Some((last, data)) if last.is_total() => (data, Some(TableRow::from(last))),
            _ => (rows, None),
        };

        ViewTable {
            headers: ColumnId::headers(),
            sort,
            rows: data.iter().map(TableRow::from).collect(),
            footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Aggregate, CountResult, FileRecord, FileType};
    use crate::options::ViewOptions;
    use crate::output::row::render_rows;
    use std::rc::Rc;

    #[test]
    fn test_from_rendered_splits_footer() {
        let records = vec![Rc::new(FileRecord::new(
            "/p/a.py",
            CountResult::new(FileType::known("python")).with_lines(3, 1, 1, 0),
        ))];
        let aggregate = Aggregate::from_results(records.iter().map(|r| &r.result));
        let rows = render_rows(&records, &aggregate, &ViewOptions::default());

        let table = ViewTable::from_rendered(&rows, SortSpec::default());
        assert_eq!(table.headers.len(), 11);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].label, "a.py");
        assert_eq!(table.rows[0].values.len(), 10);
        let footer = table.footer.unwrap();
        assert_eq!(footer.label, "Total");
        assert_eq!(footer.values.last().unwrap(), "5");
    }

    #[test]
    fn test_from_rendered_empty() {
        let table = ViewTable::from_rendered(&[], SortSpec::default());
        assert!(table.rows.is_empty());
        assert!(table.footer.is_none());

        let json = serde_json::to_value(&table).unwrap();
        assert!(json.get("footer").is_none());
        assert_eq!(json["sort"]["column"], "resource-path");
    }
}
