use crate::prefix::prefix_files_in_dir;
use crate::progress::ProgressSink;
use crate::siblings::sibling_index;
use crate::walker::subdirectories;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The one hard failure: everything after the precondition is
/// degrade-and-continue.
#[derive(Debug, Error)]
pub enum Error {
    /// The root is missing or is not a directory. Raised before any
    /// mutation and before any progress event.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Prefix every file under `root` with its parent directory's 1-based
/// natural-order rank among sibling directories.
///
/// Directories are visited depth-first with siblings in natural order; each
/// directory's index and file list are read fresh from the filesystem at
/// the moment it is processed. With `include_root_files`, the root's own
/// files are prefixed first using the root's rank among its siblings.
///
/// Individual failures are reported through `sink` and skipped; the run
/// continues with everything else and is never rolled back. There is no
/// detection of prefixes from earlier runs, so re-running adds another
/// layer.
///
/// Returns the number of files successfully renamed.
pub fn rename_tree(
    root: &Path,
    include_root_files: bool,
    sink: &mut dyn ProgressSink,
) -> Result<usize, Error> {
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let mut total = 0;

    if include_root_files {
        let index = sibling_index(root);
        sink.emit(&format!(
            "Processing root files in {} with index {}",
            root.display(),
            index
        ));
        total += prefix_files_in_dir(root, index, sink);
    }

    for directory in subdirectories(root) {
        let index = sibling_index(&directory);
        sink.emit(&format!(
            "Processing {} (index among siblings: {})",
            directory.display(),
            index
        ));
        total += prefix_files_in_dir(&directory, index, sink);
    }

    sink.emit(&format!("DONE. Total files renamed: {total}"));
    Ok(total)
}
