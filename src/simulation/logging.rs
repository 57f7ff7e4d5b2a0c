//! Logging and tracing configuration
//!
//! This module provides centralized logging configuration for the simulation.
//! Logs always go to stderr (and optionally a rolling file) so the daily
//! report on stdout stays clean.

use std::io::{self, IsTerminal};
use tracing::{debug, Level};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::types::config::CliArgs;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to enable JSON formatting
    pub json_format: bool,
    /// Whether to log to file
    pub log_to_file: bool,
    /// Log file directory (if logging to file)
    pub log_directory: Option<String>,
    /// Log file prefix (if logging to file)
    pub log_file_prefix: String,
    /// Whether to enable span events
    pub enable_span_events: bool,
    /// Whether to enable ansi colors in console output
    pub enable_ansi: bool,
    /// Custom environment filter
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_to_file: false,
            log_directory: None,
            log_file_prefix: "lending-library-simulator".to_string(),
            enable_span_events: false,
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Map the logging flags of the command line onto a configuration.
    ///
    /// `--debug` wins over `--verbose`; without either only warnings and
    /// errors are shown. `--log-json` switches the console to JSON and
    /// `--log-dir` adds a daily rolling JSON file.
    pub fn from_cli_args(args: &CliArgs) -> Self {
        let mut config = if args.debug {
            Self::new().with_level(Level::DEBUG).with_span_events()
        } else if args.verbose {
            Self::new().with_level(Level::INFO).with_span_events()
        } else {
            Self::new().with_level(Level::WARN)
        };

        if args.log_json {
            config = config.with_json_format();
        }
        if let Some(dir) = &args.log_dir {
            config = config.with_file_logging(dir.clone());
        }
        if !io::stderr().is_terminal() {
            config = config.without_ansi();
        }
        config
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable file logging
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_to_file = true;
        self.log_directory = Some(directory.into());
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Filter directive used when neither `env_filter` nor `RUST_LOG` is set
    pub fn default_directive(&self) -> String {
        format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), self.level)
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn build_filter(&self) -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match &self.env_filter {
            Some(filter) => EnvFilter::try_new(filter)?,
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.default_directive())),
        })
    }

    /// Initialize the global tracing subscriber
    pub fn init(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let registry = Registry::default().with(self.build_filter()?);

        if self.log_to_file {
            let log_dir = self.log_directory.as_deref().unwrap_or("logs");
            let file_appender = rolling::daily(log_dir, &self.log_file_prefix);
            let (file_writer, file_guard) = non_blocking(file_appender);

            // File output is always JSON; console follows `json_format`
            let file_layer = fmt::layer()
                .json()
                .with_writer(file_writer)
                .with_span_events(self.span_events());

            if self.json_format {
                let console_layer = fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_span_events(self.span_events());
                registry.with(file_layer).with(console_layer).try_init()?;
            } else {
                let console_layer = fmt::layer()
                    .with_writer(io::stderr)
                    .with_ansi(self.enable_ansi)
                    .with_span_events(self.span_events());
                registry.with(file_layer).with(console_layer).try_init()?;
            }

            // The guard must outlive the process for the file writer to flush
            std::mem::forget(file_guard);
        } else if self.json_format {
            let layer = fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_span_events(self.span_events());
            registry.with(layer).try_init()?;
        } else {
            let layer = fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(self.enable_ansi)
                .with_span_events(self.span_events());
            registry.with(layer).try_init()?;
        }

        debug!("Logging initialized with configuration: {:?}", self);
        Ok(())
    }
}

/// Macro for creating structured log events with simulation context
#[macro_export]
macro_rules! sim_event {
    ($level:ident, $message:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::$level!(
            message = $message,
            component = "simulation",
            $($key = $value,)*
        );
    };
    ($level:ident, $message:expr) => {
        tracing::$level!(
            message = $message,
            component = "simulation",
        );
    };
}

/// Macro for creating performance measurement spans
#[macro_export]
macro_rules! perf_span {
    ($name:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::info_span!(
            $name,
            component = "performance",
            $($key = $value,)*
        )
    };
    ($name:expr) => {
        tracing::info_span!(
            $name,
            component = "performance",
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tracing::Level;

    #[test]
    fn test_logging_config_creation() {
        let config = LoggingConfig::new();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.json_format);
        assert!(!config.log_to_file);
        assert!(config.log_directory.is_none());
        assert_eq!(config.log_file_prefix, "lending-library-simulator");
        assert!(!config.enable_span_events);
        assert!(config.enable_ansi);
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn test_logging_config_builder_pattern() {
        let config = LoggingConfig::new()
            .with_level(Level::DEBUG)
            .with_json_format()
            .with_file_logging("test_logs")
            .with_span_events()
            .without_ansi();

        assert_eq!(config.level, Level::DEBUG);
        assert!(config.json_format);
        assert!(config.log_to_file);
        assert_eq!(config.log_directory, Some("test_logs".to_string()));
        assert!(config.enable_span_events);
        assert!(!config.enable_ansi);
    }

    #[test]
    fn test_from_cli_args_levels() {
        let quiet = LoggingConfig::from_cli_args(&CliArgs::try_parse_from(["test"]).unwrap());
        assert_eq!(quiet.level, Level::WARN);
        assert!(!quiet.enable_span_events);
        assert!(!quiet.json_format);
        assert!(!quiet.log_to_file);

        let verbose = LoggingConfig::from_cli_args(&CliArgs::try_parse_from(["test", "-v"]).unwrap());
        assert_eq!(verbose.level, Level::INFO);
        assert!(verbose.enable_span_events);

        let debug = LoggingConfig::from_cli_args(&CliArgs::try_parse_from(["test", "-v", "-d"]).unwrap());
        assert_eq!(debug.level, Level::DEBUG);
    }

    #[test]
    fn test_from_cli_args_file_and_json() {
        let args = CliArgs::try_parse_from(["test", "--log-dir", "run_logs", "--log-json"]).unwrap();
        let config = LoggingConfig::from_cli_args(&args);
        assert!(config.json_format);
        assert!(config.log_to_file);
        assert_eq!(config.log_directory.as_deref(), Some("run_logs"));
    }

    // The only test in this crate that installs the global subscriber
    #[test]
    fn test_log_dir_receives_daily_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = CliArgs::try_parse_from(["test", "--log-dir", dir.path().to_str().unwrap(), "--log-json"]).unwrap();
        LoggingConfig::from_cli_args(&args).init().unwrap();
        tracing::warn!("file logging enabled");

        let files: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert!(
            files.iter().any(|name| name.starts_with("lending-library-simulator")),
            "{:?}",
            files
        );
    }

    #[test]
    fn test_default_directive_targets_this_crate() {
        let config = LoggingConfig::new().with_level(Level::WARN);
        assert_eq!(config.default_directive(), "lending_library_simulator=WARN");
    }

    #[test]
    fn test_invalid_env_filter_is_rejected() {
        let config = LoggingConfig {
            env_filter: Some("lending_library_simulator=notalevel".to_string()),
            ..LoggingConfig::new()
        };
        assert!(config.build_filter().is_err());
    }
}
