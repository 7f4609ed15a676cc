//! Hierarchical selection over count records.
//!
//! Records are arranged by their `/`-separated resource paths. Selecting a
//! node puts every record at or below that node in scope, which is what the
//! result view displays.

use std::collections::BTreeSet;
use std::rc::Rc;

use tracing::debug;

use super::filter::FilterConfig;
use crate::data::FileRecord;

/// Supplies the records under the current hierarchical selection.
pub trait Selector {
    fn descendants(&self) -> Vec<Rc<FileRecord>>;
}

impl Selector for [Rc<FileRecord>] {
    fn descendants(&self) -> Vec<Rc<FileRecord>> {
        self.to_vec()
    }
}

impl Selector for Vec<Rc<FileRecord>> {
    fn descendants(&self) -> Vec<Rc<FileRecord>> {
        self.clone()
    }
}

/// Split a resource path into its non-empty segments.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Whether `path` is `node` itself or lies below it, comparing whole segments.
fn is_under(path: &str, node: &[&str]) -> bool {
    let mut path_segments = segments(path);
    node.iter().all(|n| path_segments.next() == Some(*n))
}

/// Tree of count records keyed by resource path.
#[derive(Debug, Clone, Default)]
pub struct ResultTree {
    records: Vec<Rc<FileRecord>>,
    filter: FilterConfig,
    selection: Option<String>,
}

impl ResultTree {
    /// Build a tree over the given records. Nothing is selected yet.
    pub fn new(records: impl IntoIterator<Item = FileRecord>) -> Self {
        Self::from_shared(records.into_iter().map(Rc::new))
    }

    /// Build a tree over already shared records.
    pub fn from_shared(records: impl IntoIterator<Item = Rc<FileRecord>>) -> Self {
        Self {
            records: records.into_iter().collect(),
            filter: FilterConfig::default(),
            selection: None,
        }
    }

    /// Set the filter applied to descendants.
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// All records in the tree.
    pub fn records(&self) -> &[Rc<FileRecord>] {
        &self.records
    }

    /// Select a node by path. `/` (or an empty path) selects the root.
    pub fn select(&mut self, path: impl Into<String>) {
        let path = path.into();
        debug!(node = %path, "selecting result tree node");
        self.selection = Some(path);
    }

    /// Records at or below `path`, in tree order, after filtering.
    pub fn descendants_of(&self, path: &str) -> Vec<Rc<FileRecord>> {
        let node: Vec<&str> = segments(path).collect();
        self.records
            .iter()
            .filter(|r| is_under(&r.resource_path, &node))
            .filter(|r| self.filter.matches(&r.resource_path))
            .cloned()
            .collect()
    }

    /// Names of the immediate children of `path`, sorted.
    pub fn children(&self, path: &str) -> Vec<String> {
        let node: Vec<&str> = segments(path).collect();
        let children: BTreeSet<&str> = self
            .records
            .iter()
            .filter(|r| is_under(&r.resource_path, &node))
            .filter_map(|r| segments(&r.resource_path).nth(node.len()))
            .collect();
        children.into_iter().map(str::to_string).collect()
    }
}

impl Selector for ResultTree {
    fn descendants(&self) -> Vec<Rc<FileRecord>> {
        match &self.selection {
            Some(path) => self.descendants_of(path),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CountResult, FileType};

    fn record(path: &str) -> FileRecord {
        FileRecord::new(path, CountResult::new(FileType::known("python")).with_total(1))
    }

    fn sample_tree() -> ResultTree {
        ResultTree::new(vec![
            record("/proj/src/a.py"),
            record("/proj/src/util/b.py"),
            record("/proj/srcgen/c.py"),
            record("/proj/test/t.py"),
            record("/other/x.py"),
        ])
    }

    fn paths(records: &[Rc<FileRecord>]) -> Vec<&str> {
        records.iter().map(|r| r.resource_path.as_str()).collect()
    }

    #[test]
    fn test_nothing_selected() {
        let tree = sample_tree();
        assert!(tree.descendants().is_empty());
    }

    #[test]
    fn test_root_selects_everything() {
        let mut tree = sample_tree();
        tree.select("/");
        assert_eq!(tree.descendants().len(), 5);
    }

    #[test]
    fn test_folder_selection_is_segment_aware() {
        let mut tree = sample_tree();
        tree.select("/proj/src");
        assert_eq!(
            paths(&tree.descendants()),
            vec!["/proj/src/a.py", "/proj/src/util/b.py"]
        );
    }

    #[test]
    fn test_file_selection() {
        let mut tree = sample_tree();
        tree.select("/proj/test/t.py");
        assert_eq!(paths(&tree.descendants()), vec!["/proj/test/t.py"]);
    }

    #[test]
    fn test_filter_narrows_descendants() {
        let filter = FilterConfig::new().exclude("**/util/**").unwrap();
        let mut tree = sample_tree().with_filter(filter);
        tree.select("/proj");
        assert_eq!(
            paths(&tree.descendants()),
            vec!["/proj/src/a.py", "/proj/srcgen/c.py", "/proj/test/t.py"]
        );
    }

    #[test]
    fn test_children() {
        let tree = sample_tree();
        assert_eq!(tree.children("/"), vec!["other", "proj"]);
        assert_eq!(tree.children("/proj"), vec!["src", "srcgen", "test"]);
        assert!(tree.children("/proj/test/t.py").is_empty());
    }

    #[test]
    fn test_descendants_share_records() {
        let mut tree = sample_tree();
        tree.select("/other");
        let selected = tree.descendants();
        assert!(Rc::ptr_eq(&selected[0], &tree.records()[4]));
    }
}
