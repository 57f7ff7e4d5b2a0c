//! Reader profiles
//!
//! Each reader kind maps to one immutable profile through a static lookup
//! table. Profiles are shared by reference and never change.

use serde::Serialize;

use crate::types::config::constants::MAX_EXTRA_LATE_DAYS;
use crate::types::{LoanStatus, ReaderKind};

/// Behavioral constants for one reader kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReaderProfile {
    /// Kind this profile belongs to
    pub kind: ReaderKind,
    /// Percent chance (0-100) that a loan is lost
    pub loss_chance: u32,
    /// Percent chance (0-100) that a loan which is not lost comes back late
    pub late_chance: u32,
    /// Upper bound on extra days added to a late loan
    pub max_extra_late_days: u32,
    /// Display name, also used to build reader names
    pub name: &'static str,
}

/// One profile per reader kind, indexed by [`ReaderKind::index`]
pub static PROFILES: [ReaderProfile; 3] = [
    ReaderProfile {
        kind: ReaderKind::Ordinary,
        loss_chance: 5,
        late_chance: 0,
        max_extra_late_days: 0,
        name: "Ordinary",
    },
    ReaderProfile {
        kind: ReaderKind::Greedy,
        loss_chance: 10,
        late_chance: 5,
        max_extra_late_days: 0,
        name: "Greedy",
    },
    ReaderProfile {
        kind: ReaderKind::Forgetful,
        loss_chance: 5,
        late_chance: 30,
        max_extra_late_days: MAX_EXTRA_LATE_DAYS,
        name: "Forgetful",
    },
];

impl ReaderProfile {
    /// Resolve a loan outcome from a single draw in `1..=100`.
    ///
    /// Loss and lateness share the draw: `1..=loss` is lost,
    /// `loss+1..=loss+late` is late, everything above is on time.
    pub fn outcome_for(&self, chance: u32) -> LoanStatus {
        if chance <= self.loss_chance {
            LoanStatus::Lost
        } else if chance <= self.loss_chance + self.late_chance {
            LoanStatus::Late
        } else {
            LoanStatus::OnTime
        }
    }
}

impl ReaderKind {
    /// The shared profile for this kind
    pub fn profile(self) -> &'static ReaderProfile {
        &PROFILES[self.index()]
    }
}
