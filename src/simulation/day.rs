//! Day advance
//!
//! One simulated day is an optional reader arrival followed by the
//! resolution of every overdue loan. All randomness comes from the single
//! generator owned by [`DaySimulator`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::field::display;
use tracing::{debug, instrument};

use crate::library::LibraryState;
use crate::reader::create_random_reader;
use crate::report::LibraryEvent;
use crate::sim_event;
use crate::simulation::loan::issue_loan;
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::config::constants::ARRIVAL_CHANCE;
use crate::types::ReaderId;

/// Events produced while advancing one day
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayOutcome {
    /// The day that was processed
    pub day: u32,
    /// Events in the order they happened
    pub events: Vec<LibraryEvent>,
}

impl DayOutcome {
    /// The reader who arrived and borrowed a book today, if any
    pub fn arrival(&self) -> Option<ReaderId> {
        self.events.iter().find_map(|event| match event {
            LibraryEvent::ReaderArrived { reader, .. } => Some(*reader),
            _ => None,
        })
    }

    /// Whether a reader came by but found the shelf empty
    pub fn arrival_skipped(&self) -> bool {
        self.events.iter().any(|event| matches!(event, LibraryEvent::ArrivalSkipped))
    }

    /// Number of books recorded as lost today
    pub fn lost_count(&self) -> usize {
        self.events.iter().filter(|event| matches!(event, LibraryEvent::BookLost { .. })).count()
    }

    /// Number of books returned today, `(on_time, late)`
    pub fn returned_counts(&self) -> (usize, usize) {
        self.events.iter().fold((0, 0), |(on_time, late), event| match event {
            LibraryEvent::BookReturned { late: true, .. } => (on_time, late + 1),
            LibraryEvent::BookReturned { late: false, .. } => (on_time + 1, late),
            _ => (on_time, late),
        })
    }

    /// Number of readers who left today
    pub fn departed_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, LibraryEvent::ReaderDeparted { .. }))
            .count()
    }
}

/// Advances the library one day at a time
#[derive(Debug)]
pub struct DaySimulator {
    rng: StdRng,
}

impl DaySimulator {
    /// Create a simulator, seeded when `seed` is given and from entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                debug!("Using deterministic seed: {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                debug!("Using entropy-based random seed");
                StdRng::from_entropy()
            }
        };
        Self::from_rng(rng)
    }

    /// Create a simulator that draws from an existing generator
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Process `current_day`: a possible arrival, then loan resolution.
    #[instrument(skip(self, state), fields(active_readers = state.active_readers.len()))]
    pub fn advance_day(&mut self, state: &mut LibraryState, current_day: u32) -> SimulationResult<DayOutcome> {
        let mut events = Vec::new();

        if self.rng.gen_range(1..=100) <= ARRIVAL_CHANCE {
            self.admit_reader(state, current_day, &mut events);
        }

        events.extend(resolve_loans(state, current_day)?);

        Ok(DayOutcome { day: current_day, events })
    }

    fn admit_reader(&mut self, state: &mut LibraryState, current_day: u32, events: &mut Vec<LibraryEvent>) {
        let available = state.catalog.available_indices();
        if available.is_empty() {
            debug!(day = current_day, "Reader arrived to an empty shelf");
            events.push(LibraryEvent::ArrivalSkipped);
            return;
        }

        let index = available[self.rng.gen_range(0..available.len())];
        let mut reader = create_random_reader(current_day, &mut self.rng);

        let Some(book) = state.catalog.get_mut(index) else {
            return;
        };
        if !issue_loan(&mut reader, book, current_day, &mut self.rng) {
            return;
        }

        events.push(LibraryEvent::ReaderArrived {
            reader: reader.id,
            title: book.title.clone(),
            return_due_day: book.return_due_day,
            status: book.status(),
        });
        state.active_readers.push(reader);
    }
}

/// Settle every loan that is overdue on `current_day`, then drop readers with
/// nothing left on loan.
///
/// A lost loan enters the lost ledger only on the day right after its due day
/// and is always removed. A kept loan returns its book to the shelf and, if
/// late, enters the late ledger. A returning loan whose title is missing from
/// the catalog is an [`SimulationError::InvariantViolation`]; it is detected
/// before anything is mutated, so `state` is unchanged on error.
pub fn resolve_loans(state: &mut LibraryState, current_day: u32) -> SimulationResult<Vec<LibraryEvent>> {
    let stray = state.active_readers.iter().find_map(|reader| {
        reader
            .loans
            .iter()
            .find(|loan| {
                loan.is_overdue(current_day) && !loan.is_lost && state.catalog.find_by_title(&loan.title).is_none()
            })
            .map(|loan| (reader.id, loan.title.as_str()))
    });
    if let Some((reader, title)) = stray {
        return Err(SimulationError::invariant_violation(format!(
            "{} holds '{}' which is not in the catalog",
            reader, title
        )));
    }

    let LibraryState { catalog, active_readers, lost_ledger, late_ledger } = state;
    let mut events = Vec::new();

    for reader in active_readers.iter_mut() {
        let (overdue, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut reader.loans)
            .into_iter()
            .partition(|loan| loan.is_overdue(current_day));
        reader.loans = kept;

        for loan in overdue {
            if loan.is_lost {
                if current_day == loan.return_due_day + 1 {
                    sim_event!(
                        debug,
                        "Book lost",
                        day = current_day,
                        reader = display(&reader.id),
                        title = loan.title.as_str(),
                    );
                    events.push(LibraryEvent::BookLost { reader: reader.id, title: loan.title.clone() });
                    lost_ledger.push(loan);
                }
                continue;
            }

            if let Some(book) = catalog.find_by_title_mut(&loan.title) {
                book.return_to_shelf();
            }

            if loan.is_late {
                sim_event!(
                    debug,
                    "Late return",
                    day = current_day,
                    reader = display(&reader.id),
                    title = loan.title.as_str(),
                    due_day = loan.return_due_day,
                );
            }
            events.push(LibraryEvent::BookReturned {
                reader: reader.id,
                title: loan.title.clone(),
                late: loan.is_late,
            });
            if loan.is_late {
                late_ledger.push(loan);
            }
        }
    }

    active_readers.retain(|reader| {
        if reader.has_loans() {
            return true;
        }
        events.push(LibraryEvent::ReaderDeparted { reader: reader.id });
        false
    });

    Ok(events)
}
