//! # sourcecount
//!
//! A CLI for browsing per-file source count results as a sortable table.
//!
//! ## Overview
//!
//! sourcecount is built on top of sourcecountlib. It reads a JSON snapshot of
//! count records produced by a line-counting engine, selects a folder or file
//! of the resource tree, and shows every record below it with a total row.
//!
//! ## Features
//!
//! - **Hierarchical scope**: `--scope /project/src` shows everything below it
//! - **Glob filtering**: Include/exclude records with glob patterns
//! - **Column sorting**: each `--sort` is a header click; repeating a column
//!   toggles its direction
//! - **Multiple output formats**: Table (default), JSON, tab-separated copy
//! - **Tree navigation**: `--children` lists the nodes below the scope
//! - **Editor integration**: open the selected rows in `$VISUAL`/`$EDITOR`
//!
//! ## Usage
//!
//! ```bash
//! # Show all records of a snapshot
//! sourcecount counts.json
//!
//! # Largest files first under a folder
//! sourcecount counts.json --scope /project/src --sort total --sort total
//!
//! # Copy rows 0 and 2 as tab-separated text
//! sourcecount counts.json --copy --rows 0,2
//!
//! # Output as JSON
//! sourcecount counts.json --output json
//! ```
//!
//! Logging goes to stderr and is controlled by `SOURCECOUNT_LOG`
//! (e.g. `SOURCECOUNT_LOG=debug`).

mod render;

use std::io::Write;
use std::process::{Command as Process, ExitCode};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use render::OutputMode;
use sourcecountlib::{
    load_snapshot, ClipboardSink, ColumnId, EditorOpener, FileRecord, FilterConfig, MemorySurface,
    ResultTree, ResultView, SourceCountError, ViewOptions,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SOURCECOUNT_LOG";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("sourcecount")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sortable, totalled table of per-file source count results")
        .arg(
            Arg::new("snapshot")
                .required(true)
                .help("JSON snapshot of count records"),
        )
        .arg(
            Arg::new("scope")
                .long("scope")
                .default_value("/")
                .help("Resource path of the selected folder or file"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include records whose resource path matches glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude records whose resource path matches glob pattern"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .action(ArgAction::Append)
                .value_parser(|s: &str| s.parse::<ColumnId>())
                .help("Click a column header (repeat a column to toggle direction)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value("auto")
                .value_parser(["auto", "term", "text", "term-debug", "json"])
                .help("Output mode"),
        )
        .arg(
            Arg::new("copy")
                .long("copy")
                .action(ArgAction::SetTrue)
                .conflicts_with("children")
                .help("Copy the selected rows as tab-separated text to stdout"),
        )
        .arg(
            Arg::new("children")
                .long("children")
                .action(ArgAction::SetTrue)
                .help("List the nodes directly below the scope"),
        )
        .arg(
            Arg::new("rows")
                .long("rows")
                .value_delimiter(',')
                .value_parser(value_parser!(usize))
                .help("Row indices to export or open (comma-separated, default all)"),
        )
        .arg(
            Arg::new("placeholder")
                .long("placeholder")
                .help("Text for metrics of files with unknown type [default: ---]"),
        )
        .arg(
            Arg::new("open")
                .long("open")
                .action(ArgAction::SetTrue)
                .help("Open the selected rows in $VISUAL or $EDITOR"),
        )
        .arg(
            Arg::new("editor")
                .long("editor")
                .help("Editor command used with --open"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let mut filter = FilterConfig::new();

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

/// Build display options from matches
fn build_options(matches: &ArgMatches) -> ViewOptions {
    let options = ViewOptions::new();
    match matches.get_one::<String>("placeholder") {
        Some(text) => options.placeholder(text),
        None => options,
    }
}

/// Writes exported text to stdout in place of a clipboard.
struct StdoutClipboard;

impl ClipboardSink for StdoutClipboard {
    fn set_text(&mut self, text: &str) -> sourcecountlib::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Opens files with an external editor command.
struct CommandEditor {
    program: String,
}

impl CommandEditor {
    /// Editor from `--editor`, then `$VISUAL`, then `$EDITOR`.
    fn resolve(matches: &ArgMatches) -> Result<Self, anyhow::Error> {
        let program = matches
            .get_one::<String>("editor")
            .cloned()
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok())
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("no editor configured; set --editor or $EDITOR"))?;
        Ok(Self { program })
    }
}

impl EditorOpener for CommandEditor {
    fn open(&mut self, record: &FileRecord) -> sourcecountlib::Result<()> {
        let target = record
            .result
            .absolute_path
            .as_deref()
            .unwrap_or(&record.resource_path);

        let status = Process::new(&self.program)
            .arg(target)
            .status()
            .map_err(|e| SourceCountError::Collaborator(format!("{}: {}", self.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(SourceCountError::Collaborator(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}

/// Run the command and return the text to print.
fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let snapshot = matches
        .get_one::<String>("snapshot")
        .map(|s| s.as_str())
        .unwrap_or_default();
    let scope = matches
        .get_one::<String>("scope")
        .map(|s| s.as_str())
        .unwrap_or("/");

    let records = load_snapshot(snapshot)?;
    let mut tree = ResultTree::new(records).with_filter(build_filter(matches)?);

    if matches.get_flag("children") {
        let mut listing = tree.children(scope).join("\n");
        if !listing.is_empty() {
            listing.push('\n');
        }
        return Ok(listing);
    }

    tree.select(scope);

    let mut view = ResultView::with_options(MemorySurface::new(), build_options(matches));
    view.show_selection(&tree);

    if let Some(columns) = matches.get_many::<ColumnId>("sort") {
        for column in columns {
            view.set_sort(*column);
        }
    }

    let selected: Vec<usize> = match matches.get_many::<usize>("rows") {
        Some(rows) => rows.copied().collect(),
        None => view.select_all(),
    };

    if matches.get_flag("open") {
        let mut editor = CommandEditor::resolve(matches)?;
        let opened = view.open_selection(selected.iter().copied(), &mut editor);
        tracing::info!(opened, "opened files in editor");
    }

    if matches.get_flag("copy") {
        view.copy_selection(selected, &mut StdoutClipboard)?;
        return Ok(String::new());
    }

    let output_mode = matches
        .get_one::<String>("output")
        .map(|s| render::parse_output_mode(s))
        .unwrap_or(OutputMode::Auto);

    let mut output = render::render_view(&view.table(), view.rows(), output_mode)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

/// Install the stderr log subscriber.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_sort_args_parse_columns() {
        let matches = build_command()
            .try_get_matches_from(["sourcecount", "c.json", "-s", "total", "--sort", "name"])
            .unwrap();
        let columns: Vec<ColumnId> = matches
            .get_many::<ColumnId>("sort")
            .unwrap()
            .copied()
            .collect();
        assert_eq!(columns, vec![ColumnId::Total, ColumnId::Name]);
    }

    #[test]
    fn test_invalid_sort_column_rejected() {
        let result = build_command().try_get_matches_from(["sourcecount", "c.json", "-s", "lines"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rows_are_comma_separated() {
        let matches = build_command()
            .try_get_matches_from(["sourcecount", "c.json", "--rows", "2,0"])
            .unwrap();
        let rows: Vec<usize> = matches.get_many::<usize>("rows").unwrap().copied().collect();
        assert_eq!(rows, vec![2, 0]);
    }

    #[test]
    fn test_copy_conflicts_with_children() {
        let result = build_command().try_get_matches_from([
            "sourcecount",
            "c.json",
            "--copy",
            "--children",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_mode_rejects_unknown_value() {
        let result = build_command().try_get_matches_from(["sourcecount", "c.json", "-o", "tsv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_options_placeholder() {
        let matches = build_command()
            .try_get_matches_from(["sourcecount", "c.json", "--placeholder", "n/a"])
            .unwrap();
        assert_eq!(build_options(&matches).placeholder, "n/a");
    }

    #[test]
    fn test_build_filter_invalid_glob() {
        let matches = build_command()
            .try_get_matches_from(["sourcecount", "c.json", "-i", "[bad"])
            .unwrap();
        assert!(build_filter(&matches).is_err());
    }
}
