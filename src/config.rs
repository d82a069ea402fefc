//! Shell Configuration
//!
//! Settings for the queue shell, read from TOML. Discovery follows the usual
//! hierarchy and the first file found wins; command line flags override
//! whatever the file sets.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::logging::LogFormat;

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "STRQUEUE_CONFIG";

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Capacity of the buffer `rh` copies removed strings into
    pub remove_buffer_size: usize,

    /// Maximum number of elements `show` prints
    pub show_limit: usize,

    /// Echo each command before running it
    pub echo: bool,

    /// Logging configuration
    pub log: LogSection,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            remove_buffer_size: 1024,
            show_limit: 50,
            echo: false,
            log: LogSection::default(),
        }
    }
}

/// `[log]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Also log to stderr when a log file is set
    pub console: bool,
    pub console_level: String,
    pub file_level: Option<String>,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            console: true,
            console_level: "warn".to_string(),
            file_level: None,
            format: LogFormat::Text,
            file: None,
        }
    }
}

impl ShellConfig {
    /// Load configuration using the discovery hierarchy, falling back to
    /// defaults when no file exists
    pub fn load() -> Result<Self> {
        debug!("Starting configuration discovery");

        for path in discover_config_files() {
            debug!("Attempting to load config from: {}", path.display());
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        info!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from an explicit file path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = load_shell_config(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }
}

/// Candidate configuration files, most specific first
fn discover_config_files() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("strqueue").join("config.toml"));
    }

    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(".strqueue.toml"));
    }

    paths.push(PathBuf::from("./.strqueue.toml"));

    debug!("Config discovery paths: {:?}", paths);
    paths
}

/// Load shell configuration from TOML string
pub fn load_shell_config(toml_str: &str) -> Result<ShellConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Save shell configuration to TOML string
pub fn save_shell_config(config: &ShellConfig) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(config)
}
