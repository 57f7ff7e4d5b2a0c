//! Identifier types for the lending library simulator
//!
//! Readers are identified by their category and the day they arrived. At most
//! one reader arrives per day, so the pair is unique within a run.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::ReaderKind;

/// Unique identifier for a reader, rendered as `<Kind>_<day>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReaderId {
    /// Category of the reader
    pub kind: ReaderKind,
    /// Simulation day on which the reader arrived
    pub arrival_day: u32,
}

impl ReaderId {
    /// Create a reader ID from its category and arrival day
    pub fn new(kind: ReaderKind, arrival_day: u32) -> Self {
        Self { kind, arrival_day }
    }
}

impl fmt::Display for ReaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind, self.arrival_day)
    }
}

impl std::str::FromStr for ReaderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, day) = s
            .rsplit_once('_')
            .ok_or_else(|| format!("Invalid reader ID (expected <Kind>_<day>): {}", s))?;
        let kind = kind.parse::<ReaderKind>()?;
        let arrival_day = day
            .parse::<u32>()
            .map_err(|e| format!("Invalid arrival day in reader ID '{}': {}", s, e))?;
        Ok(Self { kind, arrival_day })
    }
}

impl Serialize for ReaderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ReaderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ReaderId>().map_err(serde::de::Error::custom)
    }
}
