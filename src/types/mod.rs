//! Core types and identifiers for the lending library simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: reader IDs derived from category and arrival day
//! - **Enums**: reader kinds, loan statuses and report output formats
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use lending_library_simulator::types::*;
//!
//! let id = ReaderId::new(ReaderKind::Greedy, 4);
//! assert_eq!(id.to_string(), "Greedy_4");
//!
//! let config = SimulationConfig {
//!     days: 10,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
