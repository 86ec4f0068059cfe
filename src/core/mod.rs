//! Core engine types: combatants, RNG, configuration and errors.
//!
//! Everything here is independent of cards and piles. The combat session
//! composes these pieces; games tune them via `CombatConfig` rather than
//! modifying the core.

pub mod config;
pub mod enemy;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{CombatConfig, PlayerConfig, RewardWeights, ScalingConfig};
pub use enemy::{EnemyState, Intent};
pub use entity::{attack_damage, DamageOutcome, Statuses, Vitals};
pub use error::{CatalogError, DeckError, PlayError};
pub use player::PlayerState;
pub use rng::GameRng;
