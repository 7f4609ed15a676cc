//! Display options for the result view.

use serde::{Deserialize, Serialize};

/// Text shown in metric cells of records whose type is unknown.
pub const DEFAULT_PLACEHOLDER: &str = "---";

/// Label of the first cell of the total row.
pub const DEFAULT_TOTAL_LABEL: &str = "Total";

/// Options controlling how rows are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Placeholder for the five metric cells of unknown-type records
    pub placeholder: String,
    /// First cell of the total row
    pub total_label: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            total_label: DEFAULT_TOTAL_LABEL.to_string(),
        }
    }
}

impl ViewOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder for uncomputable metrics.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set the total row label.
    pub fn total_label(mut self, label: impl Into<String>) -> Self {
        self.total_label = label.into();
        self
    }
}
