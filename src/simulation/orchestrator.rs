//! Main simulation orchestrator
//!
//! This module contains the SimulationOrchestrator and main simulation control logic.

use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::library::LibraryState;
use crate::perf_span;
use crate::report::DayReporter;
use crate::simulation::day::{DayOutcome, DaySimulator};
use crate::simulation::{SimulationError, SimulationResult, SimulationStatistics};
use crate::types::SimulationConfig;

/// Drives the library through the configured number of days
#[derive(Debug)]
pub struct SimulationOrchestrator {
    /// Configuration for the simulation
    config: SimulationConfig,
    /// The library being simulated
    state: LibraryState,
    /// Owns the random number generator
    simulator: DaySimulator,
    /// Counters accumulated across days
    statistics: SimulationStatistics,
    /// Last day processed, 0 before the first
    current_day: u32,
}

impl SimulationOrchestrator {
    /// Create a new simulation orchestrator over a fresh canonical catalog
    #[instrument(skip(config), fields(days = config.days, seed = ?config.seed))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config
            .validate()
            .map_err(|e| SimulationError::configuration_error(e.to_string()))?;

        info!("Initializing simulation for {} days", config.days);
        let simulator = DaySimulator::new(config.seed);

        Ok(Self {
            config,
            state: LibraryState::new(),
            simulator,
            statistics: SimulationStatistics::new(),
            current_day: 0,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Get the current library state
    pub fn state(&self) -> &LibraryState {
        &self.state
    }

    /// Get the statistics collected so far
    pub fn statistics(&self) -> &SimulationStatistics {
        &self.statistics
    }

    /// Last day processed
    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    /// Advance exactly one day and update statistics
    pub fn run_day(&mut self) -> SimulationResult<DayOutcome> {
        let day = self
            .current_day
            .checked_add(1)
            .ok_or_else(|| SimulationError::invariant_violation("day counter exhausted"))?;
        let outcome = self.simulator.advance_day(&mut self.state, day)?;
        self.current_day = day;
        self.statistics.record_day(&outcome, self.state.active_readers.len());

        let (on_time, late) = outcome.returned_counts();
        debug!(
            day,
            arrival = ?outcome.arrival(),
            skipped = outcome.arrival_skipped(),
            lost = outcome.lost_count(),
            on_time,
            late,
            departed = outcome.departed_count(),
            "Day complete"
        );
        Ok(outcome)
    }

    /// Run every configured day, handing each snapshot to `reporter`
    #[instrument(skip(self, reporter), fields(days = self.config.days))]
    pub fn run(&mut self, reporter: &mut dyn DayReporter) -> SimulationResult<SimulationStatistics> {
        let span = perf_span!("simulation_run", days = self.config.days);
        let _enter = span.enter();
        let started = Instant::now();

        for _ in 0..self.config.days {
            let outcome = self.run_day()?;
            reporter.report_day(&self.state.snapshot(outcome.day), &outcome.events)?;
        }
        reporter.finish()?;

        self.statistics.set_simulation_duration(started.elapsed());
        info!(
            days = self.statistics.days_simulated,
            lost = self.state.lost_ledger().len(),
            late = self.state.late_ledger().len(),
            "Simulation completed"
        );
        Ok(self.statistics.clone())
    }
}
