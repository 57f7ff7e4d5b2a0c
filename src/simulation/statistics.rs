//! Statistics collection and reporting
//!
//! This module accumulates run-wide counters from each day's outcome and
//! renders the end-of-run summary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::report::LibraryEvent;
use crate::simulation::day::DayOutcome;
use crate::types::ReaderKind;

/// Run-wide counters, updated once per simulated day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStatistics {
    /// Number of days simulated
    pub days_simulated: usize,
    /// Readers who arrived and borrowed a book
    pub arrivals: usize,
    /// Arrivals turned away because every book was out
    pub skipped_arrivals: usize,
    /// Loans issued, indexed by `ReaderKind::index()`
    pub loans_by_kind: [usize; 3],
    /// Books recorded in the lost ledger
    pub books_lost: usize,
    /// Books returned on or before their due day
    pub on_time_returns: usize,
    /// Books recorded in the late ledger
    pub late_returns: usize,
    /// Readers who left with nothing on loan
    pub readers_departed: usize,
    /// Highest number of simultaneously active readers after any day
    pub peak_active_readers: usize,
    /// Total duration of the simulation
    pub simulation_duration: Duration,
}

impl SimulationStatistics {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one day's outcome into the counters
    pub fn record_day(&mut self, outcome: &DayOutcome, active_readers: usize) {
        self.days_simulated += 1;
        for event in &outcome.events {
            match event {
                LibraryEvent::ReaderArrived { reader, .. } => {
                    self.arrivals += 1;
                    self.loans_by_kind[reader.kind.index()] += 1;
                }
                LibraryEvent::ArrivalSkipped => self.skipped_arrivals += 1,
                LibraryEvent::BookLost { .. } => self.books_lost += 1,
                LibraryEvent::BookReturned { late: true, .. } => self.late_returns += 1,
                LibraryEvent::BookReturned { late: false, .. } => self.on_time_returns += 1,
                LibraryEvent::ReaderDeparted { .. } => self.readers_departed += 1,
            }
        }
        self.peak_active_readers = self.peak_active_readers.max(active_readers);
    }

    /// Set the simulation duration
    pub fn set_simulation_duration(&mut self, duration: Duration) {
        self.simulation_duration = duration;
    }

    /// Loans issued to readers of `kind`
    pub fn loans_for(&self, kind: ReaderKind) -> usize {
        self.loans_by_kind[kind.index()]
    }

    /// Total loans issued
    pub fn total_loans(&self) -> usize {
        self.loans_by_kind.iter().sum()
    }

    /// Loans that have been settled, one way or another
    pub fn settled_loans(&self) -> usize {
        self.books_lost + self.on_time_returns + self.late_returns
    }

    /// Get the percentage of days on which a reader borrowed a book
    pub fn arrival_percentage(&self) -> f64 {
        percentage(self.arrivals, self.days_simulated)
    }

    /// Get the percentage of issued loans that ended lost
    pub fn lost_percentage(&self) -> f64 {
        percentage(self.books_lost, self.total_loans())
    }

    /// Get the percentage of issued loans returned late
    pub fn late_percentage(&self) -> f64 {
        percentage(self.late_returns, self.total_loans())
    }

    /// Get the percentage of issued loans returned on time
    pub fn on_time_percentage(&self) -> f64 {
        percentage(self.on_time_returns, self.total_loans())
    }

    /// Multi-line summary printed at the end of a run
    pub fn generate_summary_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Simulation Summary ===\n");
        report.push_str(&format!("Days simulated: {}\n", self.days_simulated));
        report.push_str(&format!(
            "Arrivals: {} ({:.1}% of days), turned away: {}\n",
            self.arrivals,
            self.arrival_percentage(),
            self.skipped_arrivals
        ));

        report.push_str("\nLoans by reader kind:\n");
        for kind in ReaderKind::ALL {
            report.push_str(&format!("  {}: {}\n", kind, self.loans_for(kind)));
        }

        report.push_str("\nOutcomes:\n");
        report.push_str(&format!("  Lost: {} ({:.1}%)\n", self.books_lost, self.lost_percentage()));
        report.push_str(&format!("  Late: {} ({:.1}%)\n", self.late_returns, self.late_percentage()));
        report.push_str(&format!("  On time: {} ({:.1}%)\n", self.on_time_returns, self.on_time_percentage()));
        report.push_str(&format!(
            "  Still out: {}\n",
            self.total_loans().saturating_sub(self.settled_loans())
        ));

        report.push_str(&format!(
            "\nReaders departed: {}, peak active: {}\n",
            self.readers_departed, self.peak_active_readers
        ));
        report.push_str(&format!("Duration: {:.2?}\n", self.simulation_duration));
        report
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}

impl fmt::Display for SimulationStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generate_summary_report())
    }
}
