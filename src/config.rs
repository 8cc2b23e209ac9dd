//! Configuration file handling for stringinspect.
//!
//! Loads configuration from `~/.config/stringinspect/config.toml` or a custom path.

use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure for stringinspect.
/// Loaded from ~/.config/stringinspect/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InputConfig {
    /// Maximum characters accepted by the input line
    #[serde(default = "default_char_limit")]
    pub char_limit: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            char_limit: default_char_limit(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HistoryConfig {
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: default_history_limit(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ViewConfig {
    /// table, detail or compact
    #[serde(default)]
    pub default: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ExportConfig {
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct LogConfig {
    /// off, error, warn, info, debug or trace
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_char_limit() -> usize {
    10_000
}

fn default_history_limit() -> usize {
    100
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            Self::parse(&content).map_err(|e| ConfigError::Parse { path, source: e })
        } else {
            Ok(Config::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Log level from `[log] level`, falling back to `Info` for missing or unknown values.
    pub fn log_level(&self) -> LevelFilter {
        self.log
            .level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Info)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
        .join("stringinspect")
        .join("config.toml")
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# stringinspect configuration

[input]
# Maximum number of characters accepted by the input line
char_limit = 10000

[history]
# Number of committed inputs kept for up/down browsing
limit = 100

[view]
# Initial view: table, detail, compact
default = "table"

[export]
# Directory where export files are written
directory = "."

[log]
# Log level: off, error, warn, info, debug, trace
level = "info"
# Log file (default: <data dir>/stringinspect/stringinspect.log)
# file = "/tmp/stringinspect.log"
"#;
