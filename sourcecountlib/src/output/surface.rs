//! Presentation surface: where rendered rows end up.
//!
//! The view drives a surface with two redraw strategies. A full rebuild
//! discards every row and creates new ones; an incremental update rewrites
//! existing row slots by index. Both leave the surface showing the same rows.

use super::row::RenderedRow;

/// A table widget that displays rendered rows.
pub trait PresentationSurface {
    /// Destroy all rows and create `rows` in order.
    fn rebuild(&mut self, rows: &[RenderedRow]);

    /// Rewrite the existing row at `index`.
    fn update(&mut self, index: usize, row: &RenderedRow);

    /// Remove every row.
    fn remove_all(&mut self);
}

/// In-memory surface that keeps the rows it was given.
///
/// Counts how it was driven, which makes the redraw strategy observable.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    rows: Vec<RenderedRow>,
    rebuilds: usize,
    updates: usize,
}

impl MemorySurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows currently shown.
    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    /// Number of full rebuilds so far.
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds
    }

    /// Number of single-row in-place updates so far.
    pub fn update_count(&self) -> usize {
        self.updates
    }
}

impl PresentationSurface for MemorySurface {
    fn rebuild(&mut self, rows: &[RenderedRow]) {
        self.rows = rows.to_vec();
        self.rebuilds += 1;
    }

    fn update(&mut self, index: usize, row: &RenderedRow) {
        if let Some(slot) = self.rows.get_mut(index) {
            *slot = row.clone();
            self.updates += 1;
        }
    }

    fn remove_all(&mut self) {
        self.rows.clear();
    }
}
