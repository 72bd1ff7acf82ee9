mod entry;
mod options;
mod size;
mod walker;

pub use entry::DirEntry;
pub use options::{is_hidden, DisplayOptions, ScanOptions, SortOrder};
pub use size::format_size;
pub use walker::{scan_directory, scan_directory_parallel};
