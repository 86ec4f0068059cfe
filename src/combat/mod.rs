//! Combat sessions: turn sequencing, card play and the enemy phase.
//!
//! ## Key Types
//!
//! - `CombatSession`: Owns one fight from `start` to `finish`
//! - `Resolver` / `Battlefield`: Card and enemy resolution on borrowed state
//! - `PlayOutcome` / `TurnReport` / `CombatReport`: Result records
//! - `CombatEvent` / `EventLog`: Structured trace of everything that happened
//! - `CombatSnapshot`: Serializable read-only view for rendering
//!
//! ## Lifecycle
//!
//! ```text
//! start ──> AwaitingInput ──play_card──> AwaitingInput
//!                │
//!             end_turn ──> enemy phase ──> next turn ──> AwaitingInput
//!                                  │
//!                          Victory / Defeat (terminal)
//! ```

pub mod events;
pub mod outcome;
pub mod resolver;
pub mod session;
pub mod snapshot;

use serde::{Deserialize, Serialize};

use crate::core::{EnemyState, PlayerState};

pub use events::{CombatEvent, EventLog};
pub use outcome::{CombatReport, DamageHit, EnemyAction, PlayOutcome, TurnReport};
pub use resolver::{Battlefield, Resolver};
pub use session::CombatSession;
pub use snapshot::{CombatSnapshot, HandCard};

/// Whether a combat is still running and, if not, who won.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatStatus {
    #[default]
    Ongoing,
    Victory,
    Defeat,
}

impl CombatStatus {
    /// Status implied by the combatants. A dead player loses even if the
    /// last enemy fell at the same time.
    #[must_use]
    pub fn evaluate(player: &PlayerState, enemies: &[EnemyState]) -> Self {
        if player.is_dead() {
            CombatStatus::Defeat
        } else if enemies.iter().all(|e| !e.is_alive()) {
            CombatStatus::Victory
        } else {
            CombatStatus::Ongoing
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, CombatStatus::Ongoing)
    }
}

impl std::fmt::Display for CombatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CombatStatus::Ongoing => "ongoing",
            CombatStatus::Victory => "victory",
            CombatStatus::Defeat => "defeat",
        };
        f.write_str(label)
    }
}
