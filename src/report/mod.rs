//! Reporting: events, snapshots, and day reporters
//!
//! The simulation core produces a [`LibrarySnapshot`] and a list of
//! [`LibraryEvent`]s after every day. Reporters turn them into output.
//!
//! # Usage Example
//!
//! ```rust
//! use lending_library_simulator::library::LibraryState;
//! use lending_library_simulator::report::*;
//!
//! let state = LibraryState::new();
//! let mut reporter = TextReporter::new(Vec::new());
//! reporter.report_day(&state.snapshot(1), &[]).unwrap();
//!
//! let text = String::from_utf8(reporter.into_inner()).unwrap();
//! assert!(text.contains("=== Day 1 ==="));
//! ```

pub mod event;
pub mod reporter;
pub mod snapshot;

// Re-export all public types for convenience
pub use event::LibraryEvent;
pub use reporter::{create_reporter, DayReporter, JsonLinesReporter, SnapshotCollector, TextReporter};
pub use snapshot::{LibrarySnapshot, LoanSnapshot, ReaderSnapshot};
