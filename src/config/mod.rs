//! Configuration management for chatsh
//!
//! This module handles loading, parsing, and managing configuration from
//! various sources:
//! - Configuration files (TOML format)
//! - Default values
//!
//! Configuration precedence (highest to lowest):
//! 1. Values set programmatically by the embedding shell
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Completion behavior configuration
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Completion behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Leading marker identifying a command line (as opposed to a message)
    #[serde(default = "default_command_marker")]
    pub command_marker: char,

    /// Always include hidden files in filesystem completion, regardless of
    /// whether the typed basename starts with a dot
    #[serde(default = "default_show_hidden_files")]
    pub show_hidden_files: bool,

    /// Override for the user's home directory used in `~` expansion.
    /// When `None`, the platform home directory is used.
    #[serde(default)]
    pub home_override: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

// Default value functions
fn default_command_marker() -> char {
    '/'
}

fn default_show_hidden_files() -> bool {
    false
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

fn default_log_timestamps() -> bool {
    true
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            command_marker: default_command_marker(),
            show_hidden_files: default_show_hidden_files(),
            home_override: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Self>` - Parsed configuration or error
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Returns
    /// * `Result<()>` - Ok if the configuration is consistent
    pub fn validate(&self) -> Result<()> {
        if self.completion.command_marker.is_whitespace() {
            return Err(ConfigError::InvalidValue {
                field: "completion.command_marker".to_string(),
                value: self.completion.command_marker.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.completion.command_marker, '/');
        assert!(!config.completion.show_hidden_files);
        assert!(config.completion.home_override.is_none());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
            [completion]
            show_hidden_files = true
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.completion.show_hidden_files);
        // Unspecified fields fall back to defaults
        assert_eq!(config.completion.command_marker, '/');
    }

    #[test]
    fn test_parse_logging_level() {
        let toml_str = r#"
            [logging]
            level = "debug"
            timestamps = false
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(!config.logging.timestamps);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[completion]\ncommand_marker = \"!\"").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.completion.command_marker, '!');
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load_from_file("/nonexistent/chatsh.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_whitespace_marker() {
        let mut config = Config::default();
        config.completion.command_marker = ' ';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
    }
}
