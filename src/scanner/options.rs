use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Sibling order applied after a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Lexicographic by entry name
    #[default]
    Name,
    /// Largest first, ties by name
    Size,
    /// Leave the order the filesystem returned
    None,
}

impl FromStr for SortOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortOrder::Name),
            "size" => Ok(SortOrder::Size),
            "none" => Ok(SortOrder::None),
            other => Err(ConfigError::Invalid(format!(
                "unknown sort order '{}' (expected name, size or none)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOrder::Name => "name",
            SortOrder::Size => "size",
            SortOrder::None => "none",
        };
        f.write_str(s)
    }
}

/// How scanned entries are labelled in the diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Append the human-readable size
    pub show_size: bool,
    /// Append '/' to directories
    pub classify: bool,
}

/// Configuration options for directory scanning operations.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Maximum depth to recurse (None = unlimited)
    pub max_depth: Option<usize>,

    /// Include hidden files/directories (starting with .)
    pub include_hidden: bool,

    /// Follow symbolic links
    pub follow_symlinks: bool,

    /// Sibling order
    pub sort: SortOrder,

    /// List directories before files
    pub dirs_first: bool,

    /// Entry labels
    pub display: DisplayOptions,
}

impl ScanOptions {
    /// Create a new ScanOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum recursion depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set whether to include hidden files
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_dirs_first(mut self, enabled: bool) -> Self {
        self.dirs_first = enabled;
        self
    }

    pub fn with_display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }
}

/// Whether a file name marks a hidden entry.
pub fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
