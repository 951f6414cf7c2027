//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, DialConfig, OutputFormat};

/// Display P3 max-chroma hue dial table generator using the Jzazbz color space.
#[derive(Parser, Debug)]
#[command(name = "huedial")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Evaluate a single hue in degrees instead of sweeping the dial
    #[arg(long, value_name = "DEGREES", conflicts_with = "samples")]
    pub hue: Option<f32>,

    /// Number of evenly spaced hue samples over [0, 360)
    #[arg(short, long)]
    pub samples: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail when validation reports out-of-gamut boundary colors
    #[arg(long)]
    pub strict: bool,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save the effective configuration to TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Log file path (logging is disabled unless set)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Resolve the effective configuration: file values, overridden by
    /// any flags given on the command line.
    pub fn effective_config(&self) -> Result<DialConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DialConfig::load(path)?,
            None => DialConfig::default(),
        };

        if let Some(samples) = self.samples {
            config.sweep.samples = samples;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }

        Ok(config)
    }
}
