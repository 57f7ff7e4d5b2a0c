//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are properly parsed and
//! layered over the configuration file and the defaults.

use clap::Parser;
use lending_library_simulator::types::config::{CliArgs, SimulationConfig};
use std::io::Write;
use tempfile::Builder;

/// Test parsing of the days argument
#[test]
fn test_days_argument_parsing() {
    let cli_args = CliArgs::try_parse_from(["test"]).unwrap();
    assert_eq!(cli_args.days, None);

    let cli_args = CliArgs::try_parse_from(["test", "--days", "5"]).unwrap();
    assert_eq!(cli_args.days, Some(5));

    let cli_args = CliArgs::try_parse_from(["test", "--days", "365"]).unwrap();
    assert_eq!(cli_args.days, Some(365));

    assert!(CliArgs::try_parse_from(["test", "--days", "-3"]).is_err());
    assert!(CliArgs::try_parse_from(["test", "--days", "many"]).is_err());
}

/// Without flags the defaults apply
#[test]
fn test_defaults_without_flags() {
    let args = CliArgs::try_parse_from(["test"]).unwrap();
    let config = SimulationConfig::from_cli_args(args).unwrap();

    assert_eq!(config.days, 50);
    assert_eq!(config.seed, None);
    assert_eq!(config.output_format, "text");
    assert_eq!(config.report_output, None);
    assert!(config.show_events);
}

/// Every run flag reaches the configuration
#[test]
fn test_all_flags_parse() {
    let args = CliArgs::try_parse_from([
        "test",
        "--days",
        "12",
        "--seed",
        "42",
        "--output-format",
        "json",
        "--report-output",
        "days.jsonl",
        "--hide-events",
        "--verbose",
        "--dry-run",
    ])
    .unwrap();

    assert!(args.verbose);
    assert!(args.dry_run);
    assert!(!args.debug);
    assert!(!args.print_config);

    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert_eq!(config.days, 12);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.output_format, "json");
    assert_eq!(config.report_output.as_deref(), Some("days.jsonl"));
    assert!(!config.show_events);
    assert!(config.validate().is_ok());
}

/// Short flags for logging
#[test]
fn test_short_logging_flags() {
    let args = CliArgs::try_parse_from(["test", "-v", "-d"]).unwrap();
    assert!(args.verbose);
    assert!(args.debug);
}

/// File and JSON logging flags
#[test]
fn test_log_output_flags() {
    let args = CliArgs::try_parse_from(["test"]).unwrap();
    assert_eq!(args.log_dir, None);
    assert!(!args.log_json);

    let args = CliArgs::try_parse_from(["test", "--log-dir", "logs", "--log-json"]).unwrap();
    assert_eq!(args.log_dir.as_deref(), Some("logs"));
    assert!(args.log_json);

    assert!(CliArgs::try_parse_from(["test", "--log-dir"]).is_err());
}

/// Day counts that would overflow due days fail validation
#[test]
fn test_days_near_counter_limit_fail_validation() {
    let days = u32::MAX.to_string();
    let args = CliArgs::try_parse_from(["test", "--days", days.as_str()]).unwrap();
    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());
}

/// CLI values take precedence over the configuration file
#[test]
fn test_cli_overrides_config_file() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"days": 30, "seed": 7, "output_format": "json", "show_events": false}}"#).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let args = CliArgs::try_parse_from(["test", "--config", &path]).unwrap();
    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert_eq!(config.days, 30);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.output_format, "json");
    assert!(!config.show_events);

    let args = CliArgs::try_parse_from(["test", "--config", &path, "--days", "3", "--seed", "9"]).unwrap();
    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert_eq!(config.days, 3);
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.output_format, "json");
}

/// A missing configuration file is reported
#[test]
fn test_missing_config_file() {
    let args = CliArgs::try_parse_from(["test", "--config", "/nonexistent/library.json"]).unwrap();
    assert!(SimulationConfig::from_cli_args(args).is_err());
}

/// Invalid values parse but fail validation
#[test]
fn test_invalid_values_fail_validation() {
    let args = CliArgs::try_parse_from(["test", "--days", "0"]).unwrap();
    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());

    let args = CliArgs::try_parse_from(["test", "--output-format", "xml"]).unwrap();
    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());
}
