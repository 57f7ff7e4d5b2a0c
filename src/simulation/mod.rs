//! Simulation orchestration and control
//!
//! This module contains the day simulator, loan issuance, the orchestrator,
//! statistics collection, logging setup, and error handling.
//!
//! # Overview
//!
//! - **SimulationOrchestrator**: Runs the configured number of days and feeds a reporter
//! - **DaySimulator**: Owns the random generator and advances one day at a time
//! - **issue_loan**: Decides a loan's fate and due day when the book leaves the shelf
//! - **resolve_loans**: Settles overdue loans and lets empty-handed readers go
//! - **SimulationStatistics**: Collects and reports run-wide counters
//! - **SimulationError**: Error type shared by every fallible operation
//!
//! # Usage Example
//!
//! ```rust
//! use lending_library_simulator::simulation::*;
//! use lending_library_simulator::types::*;
//! use lending_library_simulator::report::SnapshotCollector;
//!
//! let config = SimulationConfig {
//!     days: 20,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
//! let mut collector = SnapshotCollector::new();
//! let stats = orchestrator.run(&mut collector).unwrap();
//!
//! assert_eq!(stats.days_simulated, 20);
//! assert_eq!(collector.snapshots.len(), 20);
//! ```

pub mod day;
pub mod error;
pub mod loan;
pub mod logging;
pub mod orchestrator;
pub mod statistics;

// Re-export all public types for convenience
pub use day::{resolve_loans, DayOutcome, DaySimulator};
pub use error::*;
pub use loan::issue_loan;
pub use logging::*;
pub use orchestrator::*;
pub use statistics::*;
