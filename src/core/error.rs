//! Typed failures surfaced across the engine boundary.
//!
//! Expected rule violations are returned as `PlayError`, never panics. A
//! failed call leaves the session untouched, so callers can ignore the error
//! (e.g. simply not highlighting the play) or show `Display` text.
//!
//! Catalog problems are `CatalogError`. They indicate a defect in card data
//! rather than a player mistake.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::CardId;
use crate::combat::CombatStatus;

/// Why a `play_card` or `end_turn` call was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PlayError {
    /// Hand index is out of range.
    #[error("hand index {index} out of range (hand has {len} cards)")]
    InvalidIndex { index: usize, len: usize },

    /// The card costs more energy than the player has.
    #[error("card costs {required} energy but only {available} is available")]
    InsufficientEnergy { required: u32, available: u32 },

    /// Attack aimed at a dead or nonexistent enemy.
    #[error("enemy {index} is not a valid target")]
    InvalidTarget { index: usize },

    /// The combat already reached a terminal state.
    #[error("combat is already over ({status})")]
    CombatOver { status: CombatStatus },
}

impl PlayError {
    /// Short machine-friendly tag, used as the `reason` field in logs.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidIndex { .. } => "invalid_index",
            Self::InsufficientEnergy { .. } => "insufficient_energy",
            Self::InvalidTarget { .. } => "invalid_target",
            Self::CombatOver { .. } => "combat_over",
        }
    }
}

/// Card catalog defects.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No definition is registered under this id.
    #[error("unknown card id {0}")]
    UnknownCard(CardId),

    /// A definition with this id is already registered.
    #[error("card id {0} registered twice")]
    DuplicateCard(CardId),
}

/// Deck template edits that referenced a missing slot.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck index {index} out of range (deck has {len} cards)")]
    InvalidIndex { index: usize, len: usize },
}
