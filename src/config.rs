use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::TagOrder;
use crate::error::{ChangelogError, Result};
use crate::render::DEFAULT_SHORT_HASH_LENGTH;

pub const CONFIG_FILE_NAME: &str = "gitchangelog.toml";

/// Represents the complete configuration for git-changelog.
///
/// Every field has a default, so an empty file is a valid configuration.
/// Command-line flags take precedence over these values.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub commits: CommitsConfig,
}

fn default_short_hash_length() -> usize {
    DEFAULT_SHORT_HASH_LENGTH
}

/// Defaults for how and where the changelog is written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub email: bool,

    #[serde(default)]
    pub gh_markdown: bool,

    #[serde(default)]
    pub stdout: bool,

    #[serde(default = "default_short_hash_length")]
    pub short_hash_length: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            email: false,
            gh_markdown: false,
            stdout: false,
            short_hash_length: default_short_hash_length(),
        }
    }
}

/// Tag ordering used by automatic tag selection.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TagsConfig {
    #[serde(default)]
    pub order: TagOrder,
}

/// Commit message parsing behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct CommitsConfig {
    /// Drop commits whose type is outside the conventional taxonomy
    /// instead of listing them as unclassified
    #[serde(default)]
    pub strict_types: bool,
}

/// Parse a configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| ChangelogError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitchangelog.toml` in current directory
/// 3. `.gitchangelog.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            ChangelogError::config(format!("Cannot read config file '{}': {}", path, e))
        })?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
