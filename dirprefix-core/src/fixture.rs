use crate::output::FixtureResult;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Sibling directory names mixing numbers and alphanumerics, chosen so the
/// natural order (1, 2, 10, A, b1, B2, B10) differs from the lexical one.
pub const TOP_DIRS: [&str; 7] = ["1", "2", "10", "A", "B2", "B10", "b1"];
pub const NESTED_DIRS: [&str; 3] = ["sub1", "sub10", "sub2"];
pub const SAMPLE_FILES: [&str; 3] = ["file.txt", "readme.md", "log10.log"];

/// Create a sample directory tree for exercising the renamer.
///
/// Every top-level directory gets the same nested structure and file set.
/// Existing directories are reused, so the generator is safe to run twice
/// (file contents are simply rewritten).
pub fn create_sample_tree(target: &Path) -> Result<FixtureResult> {
    let mut directories_created = 0;
    let mut files_created = 0;

    fs::create_dir_all(target)
        .with_context(|| format!("Failed to create {}", target.display()))?;
    directories_created += 1;

    for top in TOP_DIRS {
        let dir = target.join(top);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        directories_created += 1;
        files_created += write_sample_files(&dir)?;

        for nested in NESTED_DIRS {
            let nested_dir = dir.join(nested);
            fs::create_dir_all(&nested_dir)
                .with_context(|| format!("Failed to create {}", nested_dir.display()))?;
            directories_created += 1;
            files_created += write_sample_files(&nested_dir)?;
        }
    }

    Ok(FixtureResult {
        target: target.to_path_buf(),
        directories_created,
        files_created,
    })
}

fn write_sample_files(dir: &Path) -> Result<usize> {
    for name in SAMPLE_FILES {
        let path = dir.join(name);
        fs::write(&path, format!("sample content in {name}\n"))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(SAMPLE_FILES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_documented_tree() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("tree");

        let result = create_sample_tree(&target).unwrap();

        assert_eq!(result.directories_created, 1 + 7 + 7 * 3);
        assert_eq!(result.files_created, (7 + 7 * 3) * 3);
        assert!(target.join("B10").join("sub2").join("log10.log").exists());
        assert_eq!(
            fs::read_to_string(target.join("1").join("file.txt")).unwrap(),
            "sample content in file.txt\n"
        );
    }

    #[test]
    fn test_rerun_is_safe() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("tree");

        create_sample_tree(&target).unwrap();
        let result = create_sample_tree(&target).unwrap();

        assert_eq!(result.files_created, 84);
    }
}
