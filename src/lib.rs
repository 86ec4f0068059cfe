//! # spire-engine
//!
//! A headless combat and deck resolution engine for a Spire-like
//! deckbuilder.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, timing or input handling. Callers drive a
//!    `CombatSession` and render from the records and snapshots it returns.
//!
//! 2. **Errors, Not Panics**: Illegal plays come back as `PlayError` and
//!    leave the session untouched.
//!
//! 3. **Deterministic**: Every random choice goes through a seeded
//!    `GameRng`. Same seed, same inputs, same fight.
//!
//! ## Architecture
//!
//! - **Owned Piles**: Cards move by value between draw, hand, discard and
//!   exhaust. The pile sizes always add up to the deck size.
//!
//! - **Fixed Effect Schema**: Every card shares one set of effect fields;
//!   absent means no effect.
//!
//! - **Persistent Event Log**: Combat events live in an `im::Vector`, so
//!   copies for the UI are cheap. Each event is mirrored to `tracing`.
//!
//! ## Modules
//!
//! - `core`: Player and enemy state, damage math, RNG, configuration, errors
//! - `cards`: Card definitions, instances, catalog, deck template
//! - `zones`: Draw/hand/discard/exhaust piles
//! - `enemies`: Intent policies and the enemy roster
//! - `combat`: Combat session, resolver, result records, events, snapshots
//! - `rewards`: Rarity-weighted card rewards

pub mod cards;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod rewards;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, CombatConfig, DeckError, EnemyState, GameRng, Intent,
    PlayError, PlayerConfig, PlayerState, RewardWeights, ScalingConfig, Vitals,
};

pub use crate::cards::{
    CardCatalog, CardDefinition, CardEffects, CardId, CardInstance, CardType, CardUpgrade, Cost,
    Deck, Rarity,
};

pub use crate::zones::{DrawReport, PileKind, Piles};

pub use crate::enemies::{AlwaysAttack, Bestiary, EnemyTemplate, IntentPolicy};

pub use crate::combat::{
    CombatEvent, CombatReport, CombatSession, CombatSnapshot, CombatStatus, DamageHit,
    EnemyAction, PlayOutcome, TurnReport,
};

pub use crate::rewards::RewardTable;
