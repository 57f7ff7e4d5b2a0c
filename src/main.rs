// Lending Library Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/lending-library-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/lending-library-simulator --days 100 --seed 42 --verbose
// $ ./target/release/lending-library-simulator --log-dir logs --log-json
// ```

use anyhow::Context;
use clap::Parser;
use lending_library_simulator::report::create_reporter;
use lending_library_simulator::simulation::{
    LoggingConfig, SimulationError, SimulationOrchestrator, SimulationStatistics,
};
use lending_library_simulator::types::config::CliArgs;
use lending_library_simulator::types::SimulationConfig;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    if let Err(e) = LoggingConfig::from_cli_args(&args).init() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Lending Library Simulator");

    // Load configuration from CLI arguments and optional config file
    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    match run_simulation(config) {
        Ok(statistics) => {
            eprintln!("{}", statistics);
            info!("Lending Library Simulator completed successfully");
        }
        Err(e) => {
            match e.downcast_ref::<SimulationError>() {
                Some(cause) => error!(
                    category = cause.category(),
                    recoverable = cause.is_recoverable(),
                    "Simulation failed: {:#}",
                    e
                ),
                None => error!("Simulation failed: {:#}", e),
            }
            process::exit(1);
        }
    }
}

/// Run every configured day and return the collected statistics
fn run_simulation(config: SimulationConfig) -> anyhow::Result<SimulationStatistics> {
    let mut reporter = create_reporter(&config).context("Failed to create day reporter")?;
    let mut orchestrator =
        SimulationOrchestrator::new(config).context("Failed to create orchestrator")?;

    info!("Running simulation for {} days", orchestrator.config().days);
    let statistics = orchestrator
        .run(reporter.as_mut())
        .with_context(|| format!("Simulation stopped after day {}", orchestrator.current_day()))?;

    if let Some(path) = &orchestrator.config().report_output {
        eprintln!("Daily report written to: {}", path);
    }
    Ok(statistics)
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Lending Library Simulator");
    eprintln!("=========================");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Days: {}", config.days);
    eprintln!("  Output Format: {}", config.output_format);
    match &config.report_output {
        Some(path) => eprintln!("  Report Output: {}", path),
        None => eprintln!("  Report Output: stdout"),
    }
    eprintln!("  Show Events: {}", config.show_events);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
