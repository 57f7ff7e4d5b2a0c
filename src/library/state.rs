//! Simulation state container
//!
//! `LibraryState` owns everything a run mutates: the catalog, the readers
//! currently holding books, and the two append-only ledgers. It is created
//! once per run and passed explicitly into each simulated day.

use crate::library::{Book, Catalog};
use crate::reader::Reader;
use crate::report::LibrarySnapshot;

/// Complete state of one simulated library
#[derive(Debug, Clone)]
pub struct LibraryState {
    /// The library's own copies of every title
    pub catalog: Catalog,
    /// Readers holding at least one book, in arrival order
    pub active_readers: Vec<Reader>,
    /// Every loan that ended with the book lost, in resolution order
    pub(crate) lost_ledger: Vec<Book>,
    /// Every loan returned late, in resolution order
    pub(crate) late_ledger: Vec<Book>,
}

impl LibraryState {
    /// Create a fresh state over the canonical catalog
    pub fn new() -> Self {
        Self::with_catalog(Catalog::canonical())
    }

    /// Create a fresh state over a custom catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            active_readers: Vec::new(),
            lost_ledger: Vec::new(),
            late_ledger: Vec::new(),
        }
    }

    /// Books currently on the shelf
    pub fn available_books(&self) -> impl Iterator<Item = &Book> {
        self.catalog.available_books()
    }

    /// Readers currently holding books
    pub fn active_readers(&self) -> &[Reader] {
        &self.active_readers
    }

    /// Lost ledger, oldest first
    pub fn lost_ledger(&self) -> &[Book] {
        &self.lost_ledger
    }

    /// Late ledger, oldest first
    pub fn late_ledger(&self) -> &[Book] {
        &self.late_ledger
    }

    /// Capture a read-only snapshot for reporting
    pub fn snapshot(&self, day: u32) -> LibrarySnapshot {
        LibrarySnapshot::capture(self, day)
    }
}

impl Default for LibraryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = LibraryState::new();
        assert_eq!(state.catalog.len(), 5);
        assert_eq!(state.available_books().count(), 5);
        assert!(state.active_readers().is_empty());
        assert!(state.lost_ledger().is_empty());
        assert!(state.late_ledger().is_empty());
    }

    #[test]
    fn test_ledger_accessors_expose_appended_books() {
        let mut state = LibraryState::with_catalog(Catalog::from_titles(["1984", "Clean Code"]));
        state.lost_ledger.push(Book::new("1984"));
        state.late_ledger.push(Book::new("Clean Code"));

        assert_eq!(state.lost_ledger()[0].title, "1984");
        assert_eq!(state.late_ledger()[0].title, "Clean Code");
        assert_eq!(state.catalog.len(), 2);
    }
}
