use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a full rename run
#[derive(Debug, Serialize, Deserialize)]
pub struct RunResult {
    pub root: PathBuf,
    pub include_root_files: bool,
    pub files_renamed: usize,
    pub elapsed_secs: f64,
}

/// Result of generating a sample fixture tree
#[derive(Debug, Serialize, Deserialize)]
pub struct FixtureResult {
    pub target: PathBuf,
    pub directories_created: usize,
    pub files_created: usize,
}

pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RunResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "run",
            "root": self.root,
            "include_root_files": self.include_root_files,
            "summary": {
                "files_renamed": self.files_renamed,
            },
            "elapsed_secs": self.elapsed_secs,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!(
            "SUCCESS: Renamed {} files in {:.2}s",
            self.files_renamed, self.elapsed_secs
        )
    }
}

impl OutputFormatter for FixtureResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "fixture",
            "target": self.target,
            "summary": {
                "directories_created": self.directories_created,
                "files_created": self.files_created,
            },
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        writeln!(output, "Test tree created under: {}", self.target.display()).unwrap();
        write!(
            output,
            "{} directories, {} files",
            self.directories_created, self.files_created
        )
        .unwrap();
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_result_summary() {
        let result = RunResult {
            root: PathBuf::from("/tmp/tree"),
            include_root_files: false,
            files_renamed: 42,
            elapsed_secs: 1.234,
        };
        assert_eq!(result.format_summary(), "SUCCESS: Renamed 42 files in 1.23s");
    }

    #[test]
    fn test_run_result_json_is_parseable() {
        let result = RunResult {
            root: PathBuf::from("/tmp/tree"),
            include_root_files: true,
            files_renamed: 7,
            elapsed_secs: 0.5,
        };
        let value: serde_json::Value = serde_json::from_str(&result.format_json()).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["operation"], "run");
        assert_eq!(value["include_root_files"], true);
        assert_eq!(value["summary"]["files_renamed"], 7);
    }

    #[test]
    fn test_fixture_result_summary() {
        let result = FixtureResult {
            target: PathBuf::from("/tmp/fixture"),
            directories_created: 29,
            files_created: 84,
        };
        let summary = result.format_summary();
        assert!(summary.contains("Test tree created under:"));
        assert!(summary.contains("29 directories, 84 files"));
    }
}
