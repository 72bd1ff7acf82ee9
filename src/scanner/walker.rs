use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, TreePrinterError};

use super::entry::DirEntry;
use super::options::{is_hidden, ScanOptions};

fn canonical_root(root: &Path) -> Result<PathBuf> {
    root.canonicalize().map_err(|e| TreePrinterError::Io {
        path: root.to_path_buf(),
        source: e,
    })
}

/// Scan a directory and return a tree of DirEntry
///
/// The root keeps the path as given by the caller as its name; children are
/// named by their last path component.
pub fn scan_directory(root: &Path, options: &ScanOptions) -> Result<DirEntry> {
    let canonical = canonical_root(root)?;

    let mut walker = WalkDir::new(&canonical).follow_links(options.follow_symlinks);
    if let Some(depth) = options.max_depth {
        // walkdir depth 0 is the root itself, same as ours
        walker = walker.max_depth(depth);
    }

    let include_hidden = options.include_hidden;
    let entries = walker
        .into_iter()
        .filter_entry(move |e| include_hidden || e.depth() == 0 || !is_hidden(e.file_name()));

    // walkdir yields pre-order, so the stack always holds the ancestors of
    // the entry being visited, one per depth.
    let mut stack: Vec<DirEntry> = Vec::new();

    for result in entries {
        let (depth, entry) = match result {
            Ok(e) => (e.depth(), entry_from_walkdir(&e)),
            Err(err) => {
                let Some(path) = err.path().map(Path::to_path_buf) else {
                    continue;
                };
                let depth = err.depth();
                if depth == 0 {
                    return Err(TreePrinterError::Io {
                        path,
                        source: err.into(),
                    });
                }
                tracing::warn!(path = %path.display(), error = %err, "Unreadable entry");
                let error_entry = DirEntry::new_error(path, err.to_string());

                // A directory that cannot be listed is yielded once as Ok, then
                // again as this error at the same depth: replace, don't duplicate.
                let top_index = stack.len().checked_sub(1);
                if let Some(top) = stack.last_mut() {
                    if top_index == Some(depth) && top.path == error_entry.path {
                        *top = error_entry;
                        continue;
                    }
                }
                (depth, error_entry)
            }
        };

        collapse(&mut stack, depth);
        stack.push(entry);
    }

    collapse(&mut stack, 1);
    let mut root_entry = stack
        .pop()
        .ok_or_else(|| TreePrinterError::PathNotFound(canonical.clone()))?;

    finish(&mut root_entry, root, options);
    Ok(root_entry)
}

/// Attach finished entries to their parents until `depth` ancestors remain.
fn collapse(stack: &mut Vec<DirEntry>, depth: usize) {
    while stack.len() > depth.max(1) {
        let Some(child) = stack.pop() else {
            break;
        };
        if let Some(parent) = stack.last_mut() {
            parent.children.push(child);
        }
    }
}

fn entry_from_walkdir(entry: &walkdir::DirEntry) -> DirEntry {
    let path = entry.path().to_path_buf();

    if entry.file_type().is_dir() {
        return DirEntry::new_dir(path);
    }

    match entry.metadata() {
        Ok(metadata) => DirEntry::new_file(path, metadata.len()),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Cannot read metadata");
            DirEntry::new_error(path, err.to_string())
        }
    }
}

/// Totals, ordering and labels, then the root's name as the caller spelled it.
fn finish(root_entry: &mut DirEntry, root: &Path, options: &ScanOptions) {
    root_entry.recalculate_totals_recursive();
    root_entry.sort(options.sort, options.dirs_first);
    root_entry.name = root.display().to_string();
    root_entry.apply_labels(&options.display);

    tracing::debug!(
        files = root_entry.file_count,
        dirs = root_entry.dir_count,
        "Scan finished"
    );
}

/// Parallel directory scanner for better performance on large directories
///
/// Produces the same tree as [`scan_directory`].
pub fn scan_directory_parallel(root: &Path, options: &ScanOptions) -> Result<DirEntry> {
    let canonical = canonical_root(root)?;

    let mut root_entry = scan_dir_recursive_parallel(&canonical, options, 0);
    if let Some(error) = &root_entry.error {
        return Err(TreePrinterError::InvalidPath(format!(
            "{}: {}",
            root.display(),
            error
        )));
    }

    finish(&mut root_entry, root, options);
    Ok(root_entry)
}

fn scan_dir_recursive_parallel(path: &Path, options: &ScanOptions, depth: usize) -> DirEntry {
    use rayon::prelude::*;

    // Use symlink_metadata to not follow symlinks
    let symlink_meta = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) => return DirEntry::new_error(path.to_path_buf(), e.to_string()),
    };

    let metadata = if symlink_meta.file_type().is_symlink() && options.follow_symlinks {
        match fs::metadata(path) {
            Ok(m) => m,
            Err(e) => return DirEntry::new_error(path.to_path_buf(), e.to_string()),
        }
    } else {
        symlink_meta
    };

    if !metadata.is_dir() {
        return DirEntry::new_file(path.to_path_buf(), metadata.len());
    }

    // Depth limit reached: the directory is shown without its contents
    if options.max_depth.is_some_and(|max_depth| depth >= max_depth) {
        return DirEntry::new_dir(path.to_path_buf());
    }

    let read_dir = match fs::read_dir(path) {
        Ok(rd) => rd,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Cannot read directory");
            return DirEntry::new_error(path.to_path_buf(), e.to_string());
        }
    };

    let child_paths: Vec<PathBuf> = read_dir
        .filter_map(|e| e.ok())
        .filter(|e| options.include_hidden || !is_hidden(&e.file_name()))
        .map(|e| e.path())
        .collect();

    let mut dir_entry = DirEntry::new_dir(path.to_path_buf());
    dir_entry.children = child_paths
        .par_iter()
        .map(|child_path| scan_dir_recursive_parallel(child_path, options, depth + 1))
        .collect();

    dir_entry
}
