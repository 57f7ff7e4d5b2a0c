//! Loan issuance
//!
//! The fate of a loan (lost, late, on time) and its due day are decided here,
//! once, at the moment the book leaves the shelf.

use rand::Rng;
use tracing::field::display;

use crate::library::Book;
use crate::reader::Reader;
use crate::sim_event;
use crate::types::config::constants::{MAX_LOAN_DAYS, MIN_LOAN_DAYS};
use crate::types::LoanStatus;

/// Issue `book` to `reader` on `current_day`.
///
/// Returns `false` and changes nothing if the book is already taken.
/// Otherwise draws one value in `1..=100` that decides both loss and lateness,
/// draws the base loan window, adds extra days for late loans of profiles that
/// allow them, marks the catalog copy taken, and appends a copy to the
/// reader's loans. Due days saturate at the end of the day counter.
pub fn issue_loan<R: Rng + ?Sized>(
    reader: &mut Reader,
    book: &mut Book,
    current_day: u32,
    rng: &mut R,
) -> bool {
    if book.is_taken {
        return false;
    }

    let chance: u32 = rng.gen_range(1..=100);
    let status = reader.profile.outcome_for(chance);
    book.is_lost = status == LoanStatus::Lost;
    book.is_late = status == LoanStatus::Late;

    book.return_due_day = current_day.saturating_add(rng.gen_range(MIN_LOAN_DAYS..=MAX_LOAN_DAYS));
    if book.is_late && reader.max_extra_late_days() > 0 {
        let extra = rng.gen_range(1..=reader.max_extra_late_days());
        book.return_due_day = book.return_due_day.saturating_add(extra);
    }

    book.is_taken = true;
    reader.loans.push(book.clone());

    sim_event!(
        debug,
        "Loan issued",
        day = current_day,
        reader = display(&reader.id),
        title = book.title.as_str(),
        due_day = book.return_due_day,
        status = display(status),
    );

    true
}
