//! Physical book records
//!
//! A `Book` is used both for the catalog copy of a title and for the copy a
//! reader holds while the loan is open. The two copies are only linked by title.

use serde::{Deserialize, Serialize};

use crate::types::LoanStatus;

/// Loan state of a single physical book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title, unique within the catalog
    pub title: String,
    /// Day by which the book must come back
    pub return_due_day: u32,
    /// The loan will end with the book lost
    pub is_lost: bool,
    /// The loan will end with a late return
    pub is_late: bool,
    /// The book is currently out of the library
    pub is_taken: bool,
}

impl Book {
    /// Create an untaken book
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            return_due_day: 0,
            is_lost: false,
            is_late: false,
            is_taken: false,
        }
    }

    /// Whether the book can be issued
    pub fn is_available(&self) -> bool {
        !self.is_taken
    }

    /// Whether the loan is past its due day
    pub fn is_overdue(&self, current_day: u32) -> bool {
        current_day > self.return_due_day
    }

    /// The resolved fate of the loan
    pub fn status(&self) -> LoanStatus {
        if self.is_lost {
            LoanStatus::Lost
        } else if self.is_late {
            LoanStatus::Late
        } else {
            LoanStatus::OnTime
        }
    }

    /// Put the book back into circulation.
    ///
    /// The lost flag is never cleared here; lost books do not reach this path
    /// during a simulation and their catalog copy stays taken.
    pub fn return_to_shelf(&mut self) {
        self.is_taken = false;
        if !self.is_lost {
            self.is_late = false;
        }
    }
}
