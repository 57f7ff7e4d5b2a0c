//! Library events
//!
//! Notable things that happen during a simulated day. The day simulator
//! returns them in the order they occurred; reporters and statistics consume
//! them without inspecting the state diff.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{LoanStatus, ReaderId};

/// A state change observed during one simulated day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LibraryEvent {
    /// A new reader arrived and borrowed a book
    ReaderArrived {
        /// The new reader
        reader: ReaderId,
        /// Borrowed title
        title: String,
        /// Day the book is due back
        return_due_day: u32,
        /// Fate decided at issuance
        status: LoanStatus,
    },
    /// A reader would have arrived but every book was out
    ArrivalSkipped,
    /// A loan reached its first overdue day with the book lost
    BookLost {
        /// Reader who lost the book
        reader: ReaderId,
        /// Lost title
        title: String,
    },
    /// A book came back to the shelf
    BookReturned {
        /// Reader returning the book
        reader: ReaderId,
        /// Returned title
        title: String,
        /// Whether the return was late
        late: bool,
    },
    /// A reader with no remaining loans left the library
    ReaderDeparted {
        /// Departing reader
        reader: ReaderId,
    },
}

impl LibraryEvent {
    /// Short machine-friendly name of the event kind
    pub fn kind(&self) -> &'static str {
        match self {
            LibraryEvent::ReaderArrived { .. } => "reader_arrived",
            LibraryEvent::ArrivalSkipped => "arrival_skipped",
            LibraryEvent::BookLost { .. } => "book_lost",
            LibraryEvent::BookReturned { .. } => "book_returned",
            LibraryEvent::ReaderDeparted { .. } => "reader_departed",
        }
    }
}

impl fmt::Display for LibraryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryEvent::ReaderArrived { reader, title, return_due_day, .. } => {
                write!(f, "{} borrowed \"{}\" (due day {})", reader, title, return_due_day)
            }
            LibraryEvent::ArrivalSkipped => write!(f, "A reader came by but no books were available"),
            LibraryEvent::BookLost { reader, title } => {
                write!(f, "Book \"{}\" was lost by {}", title, reader)
            }
            LibraryEvent::BookReturned { reader, title, late: true } => {
                write!(f, "{} returned \"{}\" late", reader, title)
            }
            LibraryEvent::BookReturned { reader, title, late: false } => {
                write!(f, "{} returned \"{}\"", reader, title)
            }
            LibraryEvent::ReaderDeparted { reader } => write!(f, "{} left the library", reader),
        }
    }
}
