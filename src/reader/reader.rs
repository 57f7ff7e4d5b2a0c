//! Reader entity
//!
//! A reader exists only while it holds at least one open loan.

use crate::library::Book;
use crate::reader::ReaderProfile;
use crate::types::{ReaderId, ReaderKind};

/// An active loan holder
#[derive(Debug, Clone)]
pub struct Reader {
    /// Unique identifier derived from kind and arrival day
    pub id: ReaderId,
    /// Shared behavioral profile
    pub profile: &'static ReaderProfile,
    /// Reader's copies of borrowed books, in borrowing order
    pub loans: Vec<Book>,
}

impl Reader {
    /// Create a reader with no loans
    pub fn new(kind: ReaderKind, arrival_day: u32) -> Self {
        Self {
            id: ReaderId::new(kind, arrival_day),
            profile: kind.profile(),
            loans: Vec::new(),
        }
    }

    /// Display name, e.g. `Forgetful_12`
    pub fn name(&self) -> String {
        self.id.to_string()
    }

    /// Reader category
    pub fn kind(&self) -> ReaderKind {
        self.profile.kind
    }

    /// Upper bound on extra late days
    pub fn max_extra_late_days(&self) -> u32 {
        self.profile.max_extra_late_days
    }

    /// Whether the reader still holds any book
    pub fn has_loans(&self) -> bool {
        !self.loans.is_empty()
    }
}
