//! Read-only library snapshots
//!
//! A snapshot is everything an observer may see after a day has been
//! processed: the shelf, the open loans, and both ledgers.

use serde::{Deserialize, Serialize};

use crate::library::{Book, LibraryState};
use crate::reader::Reader;
use crate::types::{LoanStatus, ReaderId, ReaderKind};

/// One open loan as seen by an observer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSnapshot {
    /// Borrowed title
    pub title: String,
    /// Day the book is due back
    pub return_due_day: u32,
    /// Fate decided at issuance
    pub status: LoanStatus,
}

impl From<&Book> for LoanSnapshot {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            return_due_day: book.return_due_day,
            status: book.status(),
        }
    }
}

/// One active reader as seen by an observer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderSnapshot {
    /// Reader identifier
    pub id: ReaderId,
    /// Reader category
    pub kind: ReaderKind,
    /// Open loans in borrowing order
    pub loans: Vec<LoanSnapshot>,
}

impl From<&Reader> for ReaderSnapshot {
    fn from(reader: &Reader) -> Self {
        Self {
            id: reader.id,
            kind: reader.kind(),
            loans: reader.loans.iter().map(LoanSnapshot::from).collect(),
        }
    }
}

/// Post-day view of the whole library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    /// Day that was just processed
    pub day: u32,
    /// Titles on the shelf, in catalog order
    pub available_books: Vec<String>,
    /// Readers holding books, in arrival order
    pub active_readers: Vec<ReaderSnapshot>,
    /// Lost ledger titles, oldest first
    pub lost_books: Vec<String>,
    /// Late ledger titles, oldest first
    pub late_returned_books: Vec<String>,
}

impl LibrarySnapshot {
    /// Capture the current state of the library
    pub fn capture(state: &LibraryState, day: u32) -> Self {
        Self {
            day,
            available_books: state.available_books().map(|book| book.title.clone()).collect(),
            active_readers: state.active_readers().iter().map(ReaderSnapshot::from).collect(),
            lost_books: state.lost_ledger().iter().map(|book| book.title.clone()).collect(),
            late_returned_books: state.late_ledger().iter().map(|book| book.title.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_fresh_state() {
        let state = LibraryState::new();
        let snapshot = state.snapshot(1);
        assert_eq!(snapshot.day, 1);
        assert_eq!(snapshot.available_books.len(), 5);
        assert!(snapshot.active_readers.is_empty());
        assert!(snapshot.lost_books.is_empty());
        assert!(snapshot.late_returned_books.is_empty());
    }

    #[test]
    fn test_capture_reflects_loans_and_ledgers() {
        let mut state = LibraryState::new();
        state.catalog.find_by_title_mut("1984").unwrap().is_taken = true;

        let mut loan = Book::new("1984");
        loan.return_due_day = 9;
        loan.is_late = true;
        loan.is_taken = true;
        let mut reader = Reader::new(ReaderKind::Forgetful, 2);
        reader.loans.push(loan);
        state.active_readers.push(reader);
        state.lost_ledger.push(Book::new("Clean Code"));

        let snapshot = state.snapshot(3);
        assert_eq!(snapshot.available_books.len(), 4);
        assert!(!snapshot.available_books.contains(&"1984".to_string()));
        assert_eq!(snapshot.active_readers.len(), 1);
        assert_eq!(snapshot.active_readers[0].id.to_string(), "Forgetful_2");
        assert_eq!(snapshot.active_readers[0].loans[0].status, LoanStatus::Late);
        assert_eq!(snapshot.active_readers[0].loans[0].return_due_day, 9);
        assert_eq!(snapshot.lost_books, vec!["Clean Code".to_string()]);
    }
}
