//! The result view: a sorted, totalled table over the records in scope.
//!
//! `ResultView` owns the working list, its aggregate, the sort state and the
//! rows it last rendered. Every operation runs to completion on the calling
//! thread and leaves the presentation surface in sync with those rows.
//!
//! Redraw strategy:
//! - a scope change recomputes everything and fully rebuilds the surface;
//! - a column click only reorders, so existing row slots are rewritten in
//!   place by index.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::data::{Aggregate, FileRecord};
use crate::options::ViewOptions;
use crate::output::{
    export_rows, render_rows, ClipboardSink, Confirmation, EditorOpener, PresentationSurface,
    RenderedRow, ViewTable,
};
use crate::query::{sort_records, ColumnId, SortSpec};
use crate::source::Selector;
use crate::Result;

/// Title of the prompt shown before clearing.
pub const CLEAR_TITLE: &str = "Confirm";

/// Question asked before clearing.
pub const CLEAR_MESSAGE: &str = "Clear the count result?";

/// How the surface is brought up to date after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Destroy all rows and create them again
    FullRebuild,
    /// Rewrite existing rows in place
    Incremental,
}

/// Sortable, aggregated table of count records.
#[derive(Debug)]
pub struct ResultView<S: PresentationSurface> {
    surface: S,
    options: ViewOptions,
    records: Vec<Rc<FileRecord>>,
    aggregate: Aggregate,
    sort: SortSpec,
    rows: Vec<RenderedRow>,
}

impl<S: PresentationSurface> ResultView<S> {
    /// Create an empty view drawing onto `surface`.
    pub fn new(surface: S) -> Self {
        Self::with_options(surface, ViewOptions::default())
    }

    /// Create an empty view with custom display options.
    pub fn with_options(surface: S, options: ViewOptions) -> Self {
        Self {
            surface,
            options,
            records: Vec::new(),
            aggregate: Aggregate::new(),
            sort: SortSpec::default(),
            rows: Vec::new(),
        }
    }

    /// Records in display order.
    pub fn records(&self) -> &[Rc<FileRecord>] {
        &self.records
    }

    /// Totals over the records in scope.
    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    /// Active sort.
    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    /// Rows as last rendered, total row last.
    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    /// Display options.
    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// The presentation surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Replace the records in scope.
    ///
    /// Recomputes the aggregate from scratch, resets the sort to its default,
    /// sorts, and fully rebuilds the surface including the total row.
    pub fn set_scope(&mut self, records: Vec<Rc<FileRecord>>) {
        self.records = records;
        self.aggregate = Aggregate::from_results(self.records.iter().map(|r| &r.result));
        self.sort = SortSpec::default();
        sort_records(&mut self.records, &self.sort);

        debug!(
            records = self.records.len(),
            total = self.aggregate.total,
            "scope changed"
        );
        self.redraw(Redraw::FullRebuild);
    }

    /// Show the records under the selector's current selection.
    pub fn show_selection<T: Selector + ?Sized>(&mut self, selector: &T) {
        self.set_scope(selector.descendants());
    }

    /// Apply a click on a column header.
    ///
    /// The active column toggles direction; another column becomes active in
    /// ascending order. Equal keys keep their previously displayed order.
    pub fn set_sort(&mut self, column: ColumnId) {
        self.sort.click(column);
        sort_records(&mut self.records, &self.sort);
        debug!(column = ?self.sort.column, direction = ?self.sort.direction, "sorted");

        // Nothing displayed (never scoped, or cleared).
        if !self.rows.is_empty() {
            self.redraw(Redraw::Incremental);
        }
    }

    /// Re-render all rows and push them to the surface.
    pub fn redraw(&mut self, mode: Redraw) {
        self.rows = render_rows(&self.records, &self.aggregate, &self.options);

        match mode {
            Redraw::FullRebuild => self.surface.rebuild(&self.rows),
            Redraw::Incremental => {
                for (idx, row) in self.rows.iter().enumerate() {
                    self.surface.update(idx, row);
                }
            }
        }
    }

    /// Indices of every rendered row, total row included.
    pub fn select_all(&self) -> Vec<usize> {
        (0..self.rows.len()).collect()
    }

    /// Tab-separated text for the selected rows, header line first.
    pub fn export(&self, selected: impl IntoIterator<Item = usize>) -> String {
        export_rows(&ColumnId::headers(), &self.rows, selected)
    }

    /// Export the selected rows to a clipboard.
    ///
    /// A clipboard failure is returned to the caller untouched.
    pub fn copy_selection<C: ClipboardSink + ?Sized>(
        &self,
        selected: impl IntoIterator<Item = usize>,
        clipboard: &mut C,
    ) -> Result<()> {
        let text = self.export(selected);
        clipboard.set_text(&text)
    }

    /// Open the record behind each selected row in an editor.
    ///
    /// The total row and out-of-range indices are skipped. A failure to open
    /// one record does not stop the others. Returns how many were opened.
    pub fn open_selection<E: EditorOpener + ?Sized>(
        &self,
        selected: impl IntoIterator<Item = usize>,
        editor: &mut E,
    ) -> usize {
        let mut opened = 0;
        for idx in selected {
            let Some(record) = self.rows.get(idx).and_then(|row| row.record.as_ref()) else {
                continue;
            };
            match editor.open(record) {
                Ok(()) => opened += 1,
                Err(e) => warn!(path = %record.resource_path, error = %e, "failed to open file"),
            }
        }
        opened
    }

    /// Clear the view after the user confirms.
    ///
    /// Removes every row, the total row included. The aggregate is left as
    /// it was; it is recomputed on the next scope change. Returns whether
    /// the view was cleared.
    pub fn clear<C: Confirmation + ?Sized>(&mut self, confirmation: &mut C) -> bool {
        if !confirmation.confirm(CLEAR_TITLE, CLEAR_MESSAGE) {
            return false;
        }

        self.records.clear();
        self.rows.clear();
        self.surface.remove_all();
        debug!("view cleared");
        true
    }

    /// Serializable snapshot of what is displayed.
    pub fn table(&self) -> ViewTable {
        ViewTable::from_rendered(&self.rows, self.sort)
    }
}
