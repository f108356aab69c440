use crate::natural::natural_key;
use crate::progress::ProgressSink;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Rename `src` to `dst`, routing through a uniquely-named temporary in the
/// same directory when `dst` already exists.
///
/// The temporary stays next to `src` so both hops are same-volume moves.
/// A failure at either hop is this file's failure; nothing is retried.
pub fn safe_rename(src: &Path, dst: &Path) -> Result<()> {
    if src == dst {
        return Ok(());
    }

    if dst.exists() {
        let mut temp_name = OsString::from(format!("__renaming__{}__", Uuid::new_v4().simple()));
        temp_name.push(src.file_name().unwrap_or_default());
        let temp = src.with_file_name(&temp_name);

        fs::rename(src, &temp)
            .with_context(|| format!("Failed to rename {} to {}", src.display(), temp.display()))?;
        fs::rename(&temp, dst)
            .with_context(|| format!("Failed to rename {} to {}", temp.display(), dst.display()))?;
    } else {
        fs::rename(src, dst)
            .with_context(|| format!("Failed to rename {} to {}", src.display(), dst.display()))?;
    }

    Ok(())
}

/// Prepend `"<index>_"` to every immediate child file of `directory`.
///
/// Files are listed at call time and processed in natural order so runs are
/// deterministic. A file that fails to rename is reported through the sink
/// and skipped; the rest of the directory is still processed. Existing
/// numeric prefixes are not detected, so a second run prefixes again.
///
/// Returns the number of files successfully renamed.
pub fn prefix_files_in_dir(directory: &Path, index: usize, sink: &mut dyn ProgressSink) -> usize {
    let Ok(entries) = fs::read_dir(directory) else {
        return 0;
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|ty| ty.is_file()).unwrap_or(false))
        .map(|entry| entry.path())
        .collect();
    files.sort_by_key(|path| {
        natural_key(&path.file_name().unwrap_or_default().to_string_lossy())
    });

    let mut renamed = 0;
    for src in files {
        // Build the new name at the OsString level so non-UTF-8 names
        // survive untouched.
        let mut new_name = OsString::from(format!("{index}_"));
        new_name.push(src.file_name().unwrap_or_default());
        let dst = src.with_file_name(&new_name);

        match safe_rename(&src, &dst) {
            Ok(()) => {
                renamed += 1;
                sink.emit(&format!("RENAMED: {} -> {}", src.display(), dst.display()));
            },
            Err(err) => {
                sink.emit(&format!("ERROR: Failed to rename {}: {err:#}", src.display()));
            },
        }
    }

    renamed
}
