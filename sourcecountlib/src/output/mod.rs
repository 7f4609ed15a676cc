//! Output: render rows, drive the presentation surface, export text.
//!
//! - **Rows**: `RenderedRow` cell text for data rows and the total row
//! - **Surface**: the `PresentationSurface` the view redraws
//! - **Export**: tab-separated clipboard text
//! - **Sinks**: editor, clipboard and confirmation collaborators
//! - **Table**: `ViewTable`, a serializable snapshot for JSON output

pub mod export;
pub mod row;
pub mod sinks;
pub mod surface;
pub mod table;

pub use export::export_rows;
pub use row::{render_record, render_rows, render_total, RenderedRow};
pub use sinks::{ClipboardSink, Confirmation, EditorOpener, FixedAnswer, MemoryClipboard};
pub use surface::{MemorySurface, PresentationSurface};
pub use table::{TableRow, ViewTable};
