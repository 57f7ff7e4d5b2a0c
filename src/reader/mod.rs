//! Reader modeling
//!
//! This module contains reader profiles, the reader entity, and reader generation.
//!
//! # Overview
//!
//! - **ReaderProfile**: fixed loss/lateness constants per reader kind
//! - **Reader**: an active loan holder with its borrowed copies
//! - **generator**: random reader synthesis on arrival
//!
//! # Usage Example
//!
//! ```rust
//! use lending_library_simulator::reader::*;
//! use lending_library_simulator::types::ReaderKind;
//!
//! let profile = ReaderKind::Forgetful.profile();
//! assert_eq!(profile.late_chance, 30);
//!
//! let reader = Reader::new(ReaderKind::Forgetful, 3);
//! assert_eq!(reader.name(), "Forgetful_3");
//! ```

pub mod generator;
pub mod profile;
#[allow(clippy::module_inception)]
pub mod reader;

// Re-export all public types for convenience
pub use generator::{create_random_reader, random_kind};
pub use profile::{ReaderProfile, PROFILES};
pub use reader::Reader;
