//! Enumeration types for the lending library simulator
//!
//! This module contains the enumeration types used throughout the simulation,
//! including reader categories, loan statuses and report output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categories of readers visiting the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReaderKind {
    /// Rarely loses a book and always returns on time
    Ordinary,
    /// Loses books more often and is occasionally late
    Greedy,
    /// Frequently late, sometimes by several extra days
    Forgetful,
}

impl ReaderKind {
    /// All reader kinds, in lookup-table order
    pub const ALL: [ReaderKind; 3] = [ReaderKind::Ordinary, ReaderKind::Greedy, ReaderKind::Forgetful];

    /// Position of this kind in [`ReaderKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            ReaderKind::Ordinary => 0,
            ReaderKind::Greedy => 1,
            ReaderKind::Forgetful => 2,
        }
    }
}

impl fmt::Display for ReaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReaderKind::Ordinary => write!(f, "Ordinary"),
            ReaderKind::Greedy => write!(f, "Greedy"),
            ReaderKind::Forgetful => write!(f, "Forgetful"),
        }
    }
}

impl FromStr for ReaderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ordinary" => Ok(ReaderKind::Ordinary),
            "greedy" => Ok(ReaderKind::Greedy),
            "forgetful" => Ok(ReaderKind::Forgetful),
            _ => Err(format!("Unknown reader kind: {}", s)),
        }
    }
}

/// Fate of a loan, decided when the book is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanStatus {
    /// Comes back by the due day
    OnTime,
    /// Comes back after the base loan window
    Late,
    /// Never comes back
    Lost,
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanStatus::OnTime => write!(f, "On Time"),
            LoanStatus::Late => write!(f, "Late"),
            LoanStatus::Lost => write!(f, "Lost"),
        }
    }
}

/// Output formats for the daily report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable sections per day
    Text,
    /// One JSON snapshot per line
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
