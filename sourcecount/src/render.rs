//! Template rendering for CLI output using outstanding

use console::{measure_text_width, pad_str, Alignment, Style};
use outstanding::{render_auto, render_with_output, Theme};
use serde::Serialize;
use sourcecountlib::{ColumnId, RenderedRow, SortDirection, SortSpec, ViewTable};

/// Include template at compile time
const RESULT_TABLE_TEMPLATE: &str = include_str!("../templates/result_table.jinja");

/// Re-export OutputMode for callers
pub use outstanding::OutputMode;

/// Widest a path-like cell may grow before it is shortened.
const MAX_CELL_WIDTH: usize = 60;

/// Data context for the result table template
#[derive(Debug, Serialize)]
struct ResultTableContext {
    /// Pre-padded header line
    header: String,
    /// Separator line (dashes)
    separator: String,
    /// Pre-padded data rows
    rows: Vec<String>,
    /// Pre-padded total row; absent when nothing is displayed
    total: Option<String>,
}

/// Truncate text to fit within max_len, adding a ".." prefix if needed.
///
/// The tail is kept, since the end of a path is the informative part.
fn truncate_start(text: &str, max_len: usize) -> String {
    let len = text.chars().count();
    if len <= max_len || max_len < 3 {
        return text.to_string();
    }
    let tail: String = text.chars().skip(len - (max_len - 2)).collect();
    format!("..{}", tail)
}

/// Header text with a marker on the active sort column.
fn header_label(column: ColumnId, sort: &SortSpec) -> String {
    if column != sort.column {
        return column.header().to_string();
    }
    let marker = match sort.direction {
        SortDirection::Ascending => '^',
        SortDirection::Descending => 'v',
    };
    format!("{} {}", column.header(), marker)
}

fn alignment(column: ColumnId) -> Alignment {
    if column.is_numeric() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new()
        .add("header", Style::new().bold())
        .add("total", Style::new().bold())
}

/// Pad every cell to its column width and join the lines.
fn build_context(rows: &[RenderedRow], sort: &SortSpec) -> ResultTableContext {
    let headers: Vec<String> = ColumnId::ALL
        .iter()
        .map(|c| header_label(*c, sort))
        .collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            ColumnId::ALL
                .iter()
                .map(|c| truncate_start(row.cell(*c), MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = ColumnId::ALL
        .iter()
        .map(|c| {
            cells
                .iter()
                .map(|r| measure_text_width(&r[c.index()]))
                .chain(std::iter::once(measure_text_width(&headers[c.index()])))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |texts: &[String]| -> String {
        ColumnId::ALL
            .iter()
            .map(|c| pad_str(&texts[c.index()], widths[c.index()], alignment(*c), None))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut data_rows = Vec::with_capacity(rows.len());
    let mut total = None;
    for (row, texts) in rows.iter().zip(&cells) {
        if row.is_total() {
            total = Some(format_line(texts));
        } else {
            data_rows.push(format_line(texts));
        }
    }

    ResultTableContext {
        header: format_line(&headers),
        separator: "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)),
        rows: data_rows,
        total,
    }
}

/// Render the view using outstanding's auto dispatch.
///
/// Structured modes serialize the table snapshot; terminal and text modes
/// render the aligned table: header, separator, data rows, separator, total
/// row. An empty view renders the header and separator only.
pub fn render_view(
    table: &ViewTable,
    rows: &[RenderedRow],
    output_mode: OutputMode,
) -> Result<String, anyhow::Error> {
    let theme = create_theme();

    if output_mode.is_structured() {
        return render_auto(RESULT_TABLE_TEMPLATE, table, &theme, output_mode)
            .map_err(|e| anyhow::anyhow!("failed to render output: {e}"));
    }

    let context = build_context(rows, &table.sort);
    render_with_output(RESULT_TABLE_TEMPLATE, &context, &theme, output_mode)
        .map_err(|e| anyhow::anyhow!("failed to render output: {e}"))
}

/// Map an `--output` value to an output mode.
pub fn parse_output_mode(value: &str) -> OutputMode {
    match value {
        "json" => OutputMode::Json,
        "text" => OutputMode::Text,
        "term-debug" => OutputMode::TermDebug,
        "term" => OutputMode::Term,
        _ => OutputMode::Auto,
    }
}
