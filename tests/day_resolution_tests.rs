//! Tests for daily loan resolution
//!
//! These tests drive `resolve_loans` and `DaySimulator::advance_day` against
//! hand-built library states and check the ledgers, the catalog, and the
//! active reader set after each day.

use std::collections::HashMap;

use lending_library_simulator::library::{Catalog, LibraryState};
use lending_library_simulator::reader::Reader;
use lending_library_simulator::report::LibraryEvent;
use lending_library_simulator::simulation::{resolve_loans, DaySimulator};
use lending_library_simulator::types::{LoanStatus, ReaderId, ReaderKind};

/// Put `title` on loan to `reader` with a fixed fate
fn lend(state: &mut LibraryState, reader: &mut Reader, title: &str, due: u32, lost: bool, late: bool) {
    let book = state.catalog.find_by_title_mut(title).unwrap();
    book.is_taken = true;
    book.is_lost = lost;
    book.is_late = late;
    book.return_due_day = due;
    reader.loans.push(book.clone());
}

fn library_with(titles: &[&str]) -> LibraryState {
    LibraryState::with_catalog(Catalog::from_titles(titles.iter().copied()))
}

/// A lost book enters the lost ledger exactly once, on the day after it is due
#[test]
fn test_lost_book_recorded_once_day_after_due() {
    let mut state = library_with(&["X"]);
    let mut reader = Reader::new(ReaderKind::Greedy, 1);
    lend(&mut state, &mut reader, "X", 10, true, false);
    state.active_readers.push(reader);

    // Day 10: due, not yet overdue
    resolve_loans(&mut state, 10).unwrap();
    assert!(state.lost_ledger().is_empty());
    assert_eq!(state.active_readers.len(), 1);
    assert_eq!(state.active_readers[0].loans.len(), 1);

    // Day 11: first overdue day
    let events = resolve_loans(&mut state, 11).unwrap();
    assert_eq!(state.lost_ledger().len(), 1);
    assert_eq!(state.lost_ledger()[0].title, "X");
    assert!(state.active_readers.is_empty());
    assert!(matches!(&events[0], LibraryEvent::BookLost { title, .. } if title == "X"));

    // Day 12: nothing new
    resolve_loans(&mut state, 12).unwrap();
    assert_eq!(state.lost_ledger().len(), 1);

    // The catalog copy never comes back
    let book = state.catalog.find_by_title("X").unwrap();
    assert!(book.is_taken);
    assert!(book.is_lost);
    assert!(state.catalog.available_indices().is_empty());
}

/// A late loan enters the late ledger and frees the catalog book
#[test]
fn test_late_return_restores_catalog_book() {
    let mut state = library_with(&["Y"]);
    let mut reader = Reader::new(ReaderKind::Forgetful, 1);
    lend(&mut state, &mut reader, "Y", 8, false, true);
    state.active_readers.push(reader);

    resolve_loans(&mut state, 8).unwrap();
    assert!(state.late_ledger().is_empty());

    let events = resolve_loans(&mut state, 9).unwrap();
    assert_eq!(state.late_ledger().len(), 1);
    assert_eq!(state.late_ledger()[0].title, "Y");

    let book = state.catalog.find_by_title("Y").unwrap();
    assert!(!book.is_taken);
    assert!(!book.is_late);
    assert!(book.is_available());

    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], LibraryEvent::BookReturned { late: true, .. }));
    assert!(matches!(events[1], LibraryEvent::ReaderDeparted { .. }));

    resolve_loans(&mut state, 10).unwrap();
    assert_eq!(state.late_ledger().len(), 1);
}

/// Readers stay while they hold at least one loan
#[test]
fn test_reader_with_remaining_loans_stays() {
    let mut state = LibraryState::new();
    let mut reader = Reader::new(ReaderKind::Ordinary, 1);
    lend(&mut state, &mut reader, "1984", 5, false, false);
    lend(&mut state, &mut reader, "Clean Code", 9, false, false);
    state.active_readers.push(reader);

    resolve_loans(&mut state, 6).unwrap();
    assert_eq!(state.active_readers.len(), 1);
    let held: Vec<&str> = state.active_readers[0].loans.iter().map(|loan| loan.title.as_str()).collect();
    assert_eq!(held, vec!["Clean Code"]);
    assert!(state.catalog.find_by_title("1984").unwrap().is_available());

    resolve_loans(&mut state, 10).unwrap();
    assert!(state.active_readers.is_empty());
    assert!(state.late_ledger().is_empty());
    assert_eq!(state.available_books().count(), 5);
}

/// Several readers are resolved in one pass, only empty-handed ones leave
#[test]
fn test_mixed_readers_resolution() {
    let mut state = LibraryState::new();

    let mut loser = Reader::new(ReaderKind::Greedy, 1);
    lend(&mut state, &mut loser, "1984", 7, true, false);
    let mut keeper = Reader::new(ReaderKind::Ordinary, 2);
    lend(&mut state, &mut keeper, "War and Peace", 12, false, false);
    let mut late = Reader::new(ReaderKind::Forgetful, 3);
    lend(&mut state, &mut late, "Clean Code", 7, false, true);

    state.active_readers.extend([loser, keeper, late]);

    resolve_loans(&mut state, 8).unwrap();
    assert_eq!(state.active_readers.len(), 1);
    assert_eq!(state.active_readers[0].kind(), ReaderKind::Ordinary);
    assert_eq!(state.lost_ledger().len(), 1);
    assert_eq!(state.late_ledger().len(), 1);
    assert!(state.active_readers.iter().all(|r| r.has_loans()));
}

/// No active reader ever has an empty loan list after a day
#[test]
fn test_no_empty_readers_after_any_day() {
    let mut simulator = DaySimulator::new(Some(31));
    let mut state = LibraryState::new();
    for day in 1..=200 {
        simulator.advance_day(&mut state, day).unwrap();
        assert!(state.active_readers.iter().all(|r| r.has_loans()), "day {}", day);
        for reader in &state.active_readers {
            for loan in &reader.loans {
                assert!(loan.return_due_day >= day, "day {}: stale loan {:?}", day, loan);
            }
        }
    }
}

/// An arrival with every book out is recorded and adds nobody
#[test]
fn test_arrival_with_empty_shelf() {
    let mut state = library_with(&["X"]);
    let mut holder = Reader::new(ReaderKind::Greedy, 1);
    lend(&mut state, &mut holder, "X", 1_000, true, false);
    state.active_readers.push(holder);

    let mut simulator = DaySimulator::new(Some(5));
    let mut skipped = 0;
    for day in 2..=60 {
        let outcome = simulator.advance_day(&mut state, day).unwrap();
        assert!(outcome.arrival().is_none());
        if outcome.arrival_skipped() {
            skipped += 1;
        }
        assert_eq!(state.active_readers.len(), 1);
    }
    assert!(skipped > 0);
}

/// A loan keeps the fate and due day it was issued with until it is resolved
#[test]
fn test_loan_fate_fixed_from_issue_to_resolution() {
    for seed in [3, 17, 2024] {
        let mut simulator = DaySimulator::new(Some(seed));
        let mut state = LibraryState::new();
        let mut issued: HashMap<(ReaderId, String), (u32, LoanStatus)> = HashMap::new();
        let mut resolved = 0;

        for day in 1..=300 {
            let outcome = simulator.advance_day(&mut state, day).unwrap();

            for event in &outcome.events {
                if let LibraryEvent::ReaderArrived { reader, title, return_due_day, status } = event {
                    issued.insert((*reader, title.clone()), (*return_due_day, *status));
                }
            }

            for reader in &state.active_readers {
                for loan in &reader.loans {
                    let (due, status) = issued[&(reader.id, loan.title.clone())];
                    assert_eq!(loan.return_due_day, due, "seed {} day {}: {}", seed, day, loan.title);
                    assert_eq!(loan.status(), status, "seed {} day {}: {}", seed, day, loan.title);
                    assert_eq!(loan.is_lost, status == LoanStatus::Lost);
                    assert_eq!(loan.is_late, status == LoanStatus::Late);
                }
            }

            for event in &outcome.events {
                let (key, settled_as) = match event {
                    LibraryEvent::BookLost { reader, title } => ((*reader, title.clone()), LoanStatus::Lost),
                    LibraryEvent::BookReturned { reader, title, late: true } => {
                        ((*reader, title.clone()), LoanStatus::Late)
                    }
                    LibraryEvent::BookReturned { reader, title, late: false } => {
                        ((*reader, title.clone()), LoanStatus::OnTime)
                    }
                    _ => continue,
                };
                let (due, status) = issued.remove(&key).unwrap();
                assert_eq!(settled_as, status, "seed {} day {}: {:?}", seed, day, key);
                assert_eq!(day, due + 1, "seed {} day {}: {:?}", seed, day, key);
                resolved += 1;
            }
        }
        assert!(resolved > 0, "seed {}", seed);
    }
}
