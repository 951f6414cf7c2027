//! TOML configuration file support for dial sweeps.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "TOML parse error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// YAML format (default)
    #[default]
    Yaml,
    /// JSON format
    Json,
    /// Plain text table
    Text,
}

/// Root configuration structure for TOML files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    /// Sweep settings
    pub sweep: SweepConfig,
    /// Output settings
    pub output: OutputConfig,
}

/// Sweep settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Number of evenly spaced hue samples over [0, 360)
    pub samples: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { samples: 360 }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
}

impl DialConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
