//! Card piles for a single combat.
//!
//! ## Key Types
//!
//! - `Piles`: Draw, hand, discard and exhaust piles with draw/reshuffle
//! - `PileKind`: Names a pile
//! - `DrawReport`: What a draw request actually did

pub mod piles;

pub use piles::{DrawReport, PileKind, Piles};
