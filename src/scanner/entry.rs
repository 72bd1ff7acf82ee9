use std::borrow::Cow;
use std::path::{Path, PathBuf};

use super::options::{DisplayOptions, SortOrder};
use super::size::format_size;
use crate::node::PrintableTreeNode;

/// A file or directory of a scanned tree.
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Full path to the file or directory
    pub path: PathBuf,

    /// Entry name (last component of path)
    pub name: String,

    /// True if this is a directory
    pub is_dir: bool,

    /// Apparent size in bytes, summed over the subtree for directories
    pub size: u64,

    /// Number of files below this entry (1 for a file)
    pub file_count: u64,

    /// Number of directories below this entry, itself excluded
    pub dir_count: u64,

    /// Child entries (empty for files)
    pub children: Vec<DirEntry>,

    /// Error message if we couldn't read this entry (permission denied, etc.)
    pub error: Option<String>,

    /// Text shown in the rendered tree
    pub label: String,
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl DirEntry {
    pub fn new_dir(path: PathBuf) -> Self {
        let name = entry_name(&path);
        Self {
            path,
            label: name.clone(),
            name,
            is_dir: true,
            size: 0,
            file_count: 0,
            dir_count: 0,
            children: Vec::new(),
            error: None,
        }
    }

    pub fn new_file(path: PathBuf, size: u64) -> Self {
        let name = entry_name(&path);
        Self {
            path,
            label: name.clone(),
            name,
            is_dir: false,
            size,
            file_count: 1,
            dir_count: 0,
            children: Vec::new(),
            error: None,
        }
    }

    pub fn new_error(path: PathBuf, error: String) -> Self {
        let mut entry = Self::new_file(path, 0);
        entry.file_count = 0;
        entry.error = Some(error);
        entry
    }

    /// Recompute size and counts from the direct children.
    pub fn recalculate_totals(&mut self) {
        if !self.is_dir {
            return;
        }
        self.size = self.children.iter().map(|c| c.size).sum();
        self.file_count = self.children.iter().map(|c| c.file_count).sum();
        self.dir_count = self
            .children
            .iter()
            .map(|c| c.dir_count + u64::from(c.is_dir))
            .sum();
    }

    /// Recompute totals bottom-up over the whole subtree.
    pub fn recalculate_totals_recursive(&mut self) {
        for child in &mut self.children {
            child.recalculate_totals_recursive();
        }
        self.recalculate_totals();
    }

    /// Order siblings at every level. `dirs_first` is applied on top of
    /// `order` and keeps it within each group.
    pub fn sort(&mut self, order: SortOrder, dirs_first: bool) {
        match order {
            SortOrder::Name => self.children.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOrder::Size => self
                .children
                .sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name))),
            SortOrder::None => {}
        }
        if dirs_first {
            self.children.sort_by_key(|c| !c.is_dir);
        }
        for child in &mut self.children {
            child.sort(order, dirs_first);
        }
    }

    /// Rebuild the rendered label of every entry in the subtree.
    pub fn apply_labels(&mut self, options: &DisplayOptions) {
        let mut label = self.name.clone();
        if options.classify && self.is_dir {
            label.push('/');
        }
        if options.show_size {
            label.push_str(&format!(" [{}]", format_size(self.size)));
        }
        if self.error.is_some() {
            label.push_str(" [!]");
        }
        self.label = label;

        for child in &mut self.children {
            child.apply_labels(options);
        }
    }
}

impl<'a> PrintableTreeNode for &'a DirEntry {
    type Children = std::slice::Iter<'a, DirEntry>;

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }

    fn children(&self) -> Self::Children {
        let entry: &'a DirEntry = *self;
        entry.children.iter()
    }
}
