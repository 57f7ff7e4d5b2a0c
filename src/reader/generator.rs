//! Reader generation
//!
//! New readers are synthesized on arrival with a uniformly random kind. The
//! generator borrows the simulation's RNG so every draw comes from one stream.

use rand::Rng;

use crate::reader::Reader;
use crate::types::ReaderKind;

/// Pick a reader kind uniformly at random
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> ReaderKind {
    ReaderKind::ALL[rng.gen_range(0..ReaderKind::ALL.len())]
}

/// Create a reader of random kind arriving on `arrival_day`
pub fn create_random_reader<R: Rng + ?Sized>(arrival_day: u32, rng: &mut R) -> Reader {
    Reader::new(random_kind(rng), arrival_day)
}
