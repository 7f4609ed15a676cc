//! Outbound collaborators: editor, clipboard and confirmation prompt.
//!
//! These are owned by the host application. The view calls them from inside
//! a single synchronous operation and never retries on their behalf.

use crate::data::FileRecord;
use crate::Result;

/// Opens a record's file in an external editor.
pub trait EditorOpener {
    fn open(&mut self, record: &FileRecord) -> Result<()>;
}

/// Accepts exported text as plain-text clipboard content.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Asks the user a yes/no question.
pub trait Confirmation {
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}

/// Confirmation with a fixed answer, for non-interactive hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl Confirmation for FixedAnswer {
    fn confirm(&mut self, _title: &str, _message: &str) -> bool {
        self.0
    }
}

/// Clipboard that keeps the last text it received.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
