use crate::natural::natural_cmp;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazy depth-first walk over every subdirectory of `root`, excluding
/// `root` itself.
///
/// At each level siblings are visited in natural order, and each sibling's
/// entire subtree is yielded before the next sibling. Directory listings
/// are read only when the walk descends into them, so a fresh walk always
/// observes the filesystem as it is at that moment. A branch that cannot be
/// listed (vanished, permission denied) yields nothing further; the walk
/// continues with the remaining siblings.
pub fn subdirectories(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by(|a, b| {
            natural_cmp(
                &a.file_name().to_string_lossy(),
                &b.file_name().to_string_lossy(),
            )
        })
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .map(walkdir::DirEntry::into_path)
}
