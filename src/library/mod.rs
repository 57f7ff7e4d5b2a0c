//! Library books, catalog, and simulation state
//!
//! # Overview
//!
//! - **Book**: loan state of one physical item
//! - **Catalog**: the fixed set of titles the library owns
//! - **LibraryState**: catalog, active readers, and the lost/late ledgers

pub mod book;
pub mod catalog;
pub mod state;

// Re-export all public types for convenience
pub use book::Book;
pub use catalog::{Catalog, CANONICAL_TITLES};
pub use state::LibraryState;
