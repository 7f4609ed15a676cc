//! Tab-separated export of rendered rows (clipboard format).

use std::collections::BTreeSet;

use super::row::RenderedRow;

/// Export selected rows as tab-separated text.
///
/// The first line holds the column headers. Each selected row index follows
/// in ascending order with its cells exactly as rendered. Every line ends
/// with `\n`. Indices past the last row are ignored.
pub fn export_rows(
    headers: &[String],
    rows: &[RenderedRow],
    selected: impl IntoIterator<Item = usize>,
) -> String {
    let selected: BTreeSet<usize> = selected.into_iter().collect();

    let mut content = headers.join("\t");
    content.push('\n');

    for row in selected.iter().filter_map(|&idx| rows.get(idx)) {
        content.push_str(&row.cells.join("\t"));
        content.push('\n');
    }

    content
}
