use crate::natural::natural_key;
use std::fs;
use std::path::{Path, PathBuf};

/// 1-based rank of `dir` among its parent's child directories, sorted in
/// natural order.
///
/// The parent is listed directly from the filesystem at call time, never
/// from a cached tree, because earlier renames may have changed it. Every
/// degenerate case degrades to 1 instead of failing the walk: no usable
/// parent, an unreadable parent, or `dir` missing from the parent's listing
/// (vanished or permission-filtered mid-run).
pub fn sibling_index(dir: &Path) -> usize {
    let Some(parent) = dir.parent() else {
        return 1;
    };
    // A bare relative name like "top" has an empty parent path; list the
    // working directory in that case.
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };

    let Ok(entries) = fs::read_dir(parent) else {
        return 1;
    };

    let mut siblings: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|ty| ty.is_dir()).unwrap_or(false))
        .map(|entry| entry.path())
        .collect();
    siblings.sort_by_key(|path| {
        natural_key(&path.file_name().unwrap_or_default().to_string_lossy())
    });

    // Sibling directories cannot share a name, so matching on the final
    // component is enough and is immune to path spelling differences.
    siblings
        .iter()
        .position(|sibling| sibling.file_name() == dir.file_name())
        .map_or(1, |pos| pos + 1)
}
