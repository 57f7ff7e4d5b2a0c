//! Lending Library Simulator
//!
//! A day-by-day simulation of a small lending library. Readers of different
//! kinds arrive, borrow books, and return them on time, late, or never.
//!
//! # Overview
//!
//! The library owns a fixed catalog of titles. On every simulated day a reader
//! may arrive and borrow one available book. The fate of that loan (lost, late,
//! or on time) and its due day are decided the moment the book leaves the
//! shelf. Once a loan is overdue it is settled: lost books go to the lost
//! ledger, late returns to the late ledger, and the book goes back on the shelf
//! unless it was lost.
//!
//! ## Key Features
//!
//! - **Reader Profiles**: Ordinary, greedy, and forgetful readers with fixed loss and lateness odds
//! - **Deterministic Runs**: One seeded random generator drives the whole simulation
//! - **Daily Reports**: Human-readable text or JSON lines, to stdout or a file
//! - **Run Statistics**: Arrivals, loans per reader kind, and loan outcomes
//!
//! ## Quick Start
//!
//! ```rust
//! use lending_library_simulator::*;
//!
//! let config = SimulationConfig {
//!     days: 30,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//!
//! let mut orchestrator = SimulationOrchestrator::new(config)?;
//! let mut collector = SnapshotCollector::new();
//! let stats = orchestrator.run(&mut collector)?;
//!
//! println!("{} books lost in {} days", stats.books_lost, stats.days_simulated);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Core enums, identifiers, and configuration
//! - [`reader`]: Reader profiles and reader generation
//! - [`library`]: Books, the catalog, and the library state
//! - [`report`]: Events, snapshots, and day reporters
//! - [`simulation`]: Loan issuance, day advance, orchestration, and statistics
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod library;
pub mod reader;
pub mod report;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    ConfigValidationError,
    // Enums
    LoanStatus,
    OutputFormat,
    // Identifiers
    ReaderId,
    ReaderKind,
    // Configuration
    SimulationConfig,
};

// Library state
pub use library::{Book, Catalog, LibraryState};

// Readers
pub use reader::{Reader, ReaderProfile};

// Reporting
pub use report::{DayReporter, LibraryEvent, LibrarySnapshot, SnapshotCollector};

// Simulation types and functionality
pub use simulation::{
    issue_loan, resolve_loans, DayOutcome, DaySimulator, SimulationError, SimulationOrchestrator,
    SimulationResult, SimulationStatistics,
};
