//! Column and sort configuration for the result view.
//!
//! The set of columns is fixed and ordered. Every column can be sorted on,
//! and clicking a column header drives the [`SortSpec`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SourceCountError;

/// A column of the result table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    /// File name (last path segment)
    Name,
    /// Workspace-style resource path
    ResourcePath,
    /// Absolute path on disk (may be absent)
    FilePath,
    /// File extension
    Extension,
    /// Source type
    Type,
    /// File size in bytes
    FileSize,
    /// Statement lines
    Statement,
    /// Documentation lines
    Document,
    /// Comment lines
    Comment,
    /// Empty lines
    Empty,
    /// Total lines
    Total,
}

impl ColumnId {
    /// All columns, in display order.
    pub const ALL: [ColumnId; 11] = [
        ColumnId::Name,
        ColumnId::ResourcePath,
        ColumnId::FilePath,
        ColumnId::Extension,
        ColumnId::Type,
        ColumnId::FileSize,
        ColumnId::Statement,
        ColumnId::Document,
        ColumnId::Comment,
        ColumnId::Empty,
        ColumnId::Total,
    ];

    /// Header text shown for the column.
    pub fn header(self) -> &'static str {
        match self {
            ColumnId::Name => "Name",
            ColumnId::ResourcePath => "Resource Path",
            ColumnId::FilePath => "File Path",
            ColumnId::Extension => "Extension",
            ColumnId::Type => "Type",
            ColumnId::FileSize => "File Size",
            ColumnId::Statement => "Statement",
            ColumnId::Document => "Document",
            ColumnId::Comment => "Comment",
            ColumnId::Empty => "Empty",
            ColumnId::Total => "Total",
        }
    }

    /// Position of the column in a rendered row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the column is one of the five line metrics, which are
    /// meaningless for records of unknown type.
    pub fn is_metric(self) -> bool {
        matches!(
            self,
            ColumnId::Statement
                | ColumnId::Document
                | ColumnId::Comment
                | ColumnId::Empty
                | ColumnId::Total
        )
    }

    /// Whether the column holds numbers (right-aligned on screen).
    pub fn is_numeric(self) -> bool {
        self == ColumnId::FileSize || self.is_metric()
    }

    /// Header texts for all columns.
    pub fn headers() -> Vec<String> {
        Self::ALL.iter().map(|c| c.header().to_string()).collect()
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for ColumnId {
    type Err = SourceCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();

        match normalized.as_str() {
            "name" => Ok(ColumnId::Name),
            "resourcepath" | "resource" | "path" => Ok(ColumnId::ResourcePath),
            "filepath" | "absolutepath" | "file" => Ok(ColumnId::FilePath),
            "extension" | "ext" => Ok(ColumnId::Extension),
            "type" => Ok(ColumnId::Type),
            "filesize" | "size" => Ok(ColumnId::FileSize),
            "statement" | "statements" => Ok(ColumnId::Statement),
            "document" | "documents" | "doc" | "docs" => Ok(ColumnId::Document),
            "comment" | "comments" => Ok(ColumnId::Comment),
            "empty" | "blank" | "blanks" => Ok(ColumnId::Empty),
            "total" => Ok(ColumnId::Total),
            _ => Err(SourceCountError::UnknownColumn(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    /// Ascending (A-Z, smallest first)
    #[default]
    Ascending,
    /// Descending (Z-A, largest first)
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column to sort by
    pub column: ColumnId,
    /// Sort direction
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: ColumnId::ResourcePath,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortSpec {
    /// Sort ascending by the given column.
    pub fn by(column: ColumnId) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    /// Set sort direction to descending
    pub fn descending(mut self) -> Self {
        self.direction = SortDirection::Descending;
        self
    }

    /// Apply a header click: the active column toggles direction, any other
    /// column becomes active in ascending order.
    pub fn click(&mut self, column: ColumnId) {
        if self.column == column {
            self.direction = self.direction.toggle();
        } else {
            self.column = column;
            self.direction = SortDirection::Ascending;
        }
    }
}
