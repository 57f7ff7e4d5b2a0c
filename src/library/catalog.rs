//! Library catalog and title lookup
//!
//! This module contains the `Catalog` struct: the fixed set of physical books
//! the library owns, with lookup by title and availability queries.

use serde::{Deserialize, Serialize};

use crate::library::Book;

/// Titles the library owns at the start of every simulation
pub const CANONICAL_TITLES: [&str; 5] = [
    "Crime and Punishment",
    "Clean Code",
    "War and Peace",
    "1984",
    "The Master and Margarita",
];

/// The library's own copies of every title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create a catalog holding one untaken copy of each canonical title
    pub fn canonical() -> Self {
        Self::from_titles(CANONICAL_TITLES)
    }

    /// Create a catalog from arbitrary titles.
    ///
    /// Duplicate titles are skipped since titles identify books.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut books: Vec<Book> = Vec::new();
        for title in titles {
            let title = title.into();
            if !books.iter().any(|b| b.title == title) {
                books.push(Book::new(title));
            }
        }
        Self { books }
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// All catalog books in catalog order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Indices of books that are not taken, in catalog order
    pub fn available_indices(&self) -> Vec<usize> {
        self.books
            .iter()
            .enumerate()
            .filter(|(_, book)| book.is_available())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Books that are not taken, in catalog order
    pub fn available_books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter().filter(|book| book.is_available())
    }

    /// Get a mutable book by catalog index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Book> {
        self.books.get_mut(index)
    }

    /// Find a book by title
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title == title)
    }

    /// Find a mutable book by title
    pub fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.title == title)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::canonical()
    }
}
