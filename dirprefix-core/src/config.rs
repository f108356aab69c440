use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".dirprefix.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Whether files directly under the root are also prefixed
    #[serde(default)]
    pub include_root_files: bool,

    /// Default output format: "summary" or "json"
    #[serde(default = "default_output")]
    pub output: String,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            include_root_files: false,
            output: default_output(),
            use_color: None,
        }
    }
}

fn default_output() -> String {
    "summary".to_string()
}

impl Config {
    /// Load config from `.dirprefix.toml` in the working directory if it
    /// exists.
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.defaults.include_root_files);
        assert_eq!(config.defaults.output, "summary");
        assert_eq!(config.defaults.use_color, None);
    }

    #[test]
    fn test_load_save_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.defaults.include_root_files = true;
        config.defaults.output = "json".to_string();
        config.defaults.use_color = Some(false);

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert!(loaded.defaults.include_root_files);
        assert_eq!(loaded.defaults.output, "json");
        assert_eq!(loaded.defaults.use_color, Some(false));
    }

    #[test]
    fn test_partial_config() {
        let toml_content = r#"
[defaults]
include_root_files = true
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.defaults.include_root_files);
        // Other fields should have their defaults
        assert_eq!(config.defaults.output, "summary");
        assert_eq!(config.defaults.use_color, None);
    }
}
