//! Configuration structures for the lending library simulator
//!
//! This module contains the simulation configuration structure and validation logic
//! used to control a run. The loan probabilities themselves are fixed per reader
//! profile and are not configurable.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fixed simulation constants
pub mod constants {
    /// Number of days simulated when nothing else is configured
    pub const DEFAULT_DAYS: usize = 50;

    /// Percent chance that a new reader arrives on a given day
    pub const ARRIVAL_CHANCE: u32 = 50;

    /// Shortest base loan window, in days
    pub const MIN_LOAN_DAYS: u32 = 6;

    /// Longest base loan window, in days
    pub const MAX_LOAN_DAYS: u32 = 10;

    /// Most extra days any reader profile adds to a late loan
    pub const MAX_EXTRA_LATE_DAYS: u32 = 3;

    /// Longest run whose due days and first overdue day still fit the day counter
    pub const MAX_SIMULATION_DAYS: u32 = u32::MAX - (MAX_LOAN_DAYS + MAX_EXTRA_LATE_DAYS + 1);
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "lending-library-simulator",
    version = "0.1.0",
    about = "Lending Library Simulator - Simulates readers borrowing, losing and returning books",
    long_about = "Simulates a small lending library day by day. Readers arrive at random, borrow an available book, and depending on their profile return it on time, return it late, or lose it.

EXAMPLES:
    # Run the default 50-day simulation
    lending-library-simulator

    # Reproducible run
    lending-library-simulator --seed 42 --days 30

    # Use a configuration file
    lending-library-simulator --config config.json

    # Emit one JSON snapshot per day into a file
    lending-library-simulator --output-format json --report-output days.jsonl

    # Generate configuration template
    lending-library-simulator --print-config > my-config.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of days to simulate
    #[arg(
        long,
        help = "Number of days to simulate",
        long_help = "Number of days to simulate. Must be greater than 0. Default: 50"
    )]
    pub days: Option<usize>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Output format for the daily report
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for the daily report. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Output path for the daily report
    #[arg(long, help = "Write the daily report to this file instead of stdout")]
    pub report_output: Option<String>,

    /// Hide the per-day event list in the text report
    #[arg(long, help = "Hide the per-day event list in the text report")]
    pub hide_events: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,

    /// Directory for rolling log files
    #[arg(
        long,
        help = "Also write logs to daily rolling files in this directory",
        long_help = "Also write JSON logs to daily rolling files in this directory. Files are named lending-library-simulator.YYYY-MM-DD."
    )]
    pub log_dir: Option<String>,

    /// Format console logs as JSON
    #[arg(long, help = "Format console logs as JSON")]
    pub log_json: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of days to simulate
    pub days: Option<usize>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format for the daily report
    pub output_format: Option<String>,

    /// Output path for the daily report
    pub report_output: Option<String>,

    /// Whether the text report lists the day's events
    pub show_events: Option<bool>,
}

/// Configuration for a lending library simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of days to simulate
    pub days: usize,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format for the daily report
    pub output_format: String,

    /// Output path for the daily report (stdout when absent)
    pub report_output: Option<String>,

    /// Whether the text report lists the day's events
    pub show_events: bool,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Days count is invalid
    #[error("Days count must be greater than 0, got {0}")]
    InvalidDaysCount(usize),

    /// Days count leaves no room for due days in the day counter
    #[error("Days count is too large: {0} (maximum {max})", max = constants::MAX_SIMULATION_DAYS)]
    DaysCountTooLarge(usize),

    /// Output format is not recognised
    #[error("Invalid output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: constants::DEFAULT_DAYS,
            seed: None,
            output_format: "text".to_string(),
            report_output: None,
            show_events: true,
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            days: config_file.days.unwrap_or(defaults.days),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            report_output: config_file.report_output.or(defaults.report_output),
            show_events: config_file.show_events.unwrap_or(defaults.show_events),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.days {
            config.days = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.report_output {
            config.report_output = Some(value);
        }
        if args.hide_events {
            config.show_events = false;
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.days == 0 {
            return Err(ConfigValidationError::InvalidDaysCount(self.days));
        }

        if self.days > constants::MAX_SIMULATION_DAYS as usize {
            return Err(ConfigValidationError::DaysCountTooLarge(self.days));
        }

        if self.get_output_format().is_err() {
            return Err(ConfigValidationError::InvalidOutputFormat(self.output_format.clone()));
        }

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse::<OutputFormat>()
    }
}
