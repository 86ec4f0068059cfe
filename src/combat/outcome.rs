//! Result records returned by the combat session.
//!
//! These carry everything a presentation layer needs to animate a play or
//! an enemy phase after the fact. The engine has already applied them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::CombatStatus;
use crate::cards::{CardInstance, Deck};
use crate::core::{DamageOutcome, Intent, PlayerState};
use crate::zones::DrawReport;

/// One application of card damage to one enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageHit {
    /// Index into the session's enemy list.
    pub target: usize,
    /// Damage after strength, weak and vulnerable.
    pub amount: u32,
    pub outcome: DamageOutcome,
    /// This hit reduced the enemy to zero health.
    pub killed: bool,
}

/// What a successful `play_card` did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// The card that was played, as it was played.
    pub card: CardInstance,
    pub energy_spent: u32,
    /// In resolution order. X-cost cards repeat their targets X times.
    pub hits: SmallVec<[DamageHit; 4]>,
    pub block_gained: u32,
    pub draw: DrawReport,
    pub energy_gained: u32,
    pub strength_gained: u32,
    pub thorns_gained: u32,
    /// Enemies that received weak or vulnerable.
    pub debuffed: SmallVec<[usize; 4]>,
    /// The card went to the exhaust pile instead of discard.
    pub exhausted: bool,
    pub status: CombatStatus,
}

impl PlayOutcome {
    /// Total damage dealt, blocked or not.
    #[must_use]
    pub fn total_damage(&self) -> u32 {
        self.hits.iter().map(|hit| hit.outcome.total()).sum()
    }

    /// Number of enemies this play killed.
    #[must_use]
    pub fn kills(&self) -> usize {
        self.hits.iter().filter(|hit| hit.killed).count()
    }
}

/// What one enemy did during the enemy phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyAction {
    pub enemy: usize,
    pub kind: String,
    /// The intent that executed.
    pub intent: Intent,
    /// Damage dealt to the player, for attacks.
    pub damage: Option<DamageOutcome>,
    /// Thorns damage the enemy took in return.
    pub thorns: Option<DamageOutcome>,
    /// Intent declared for the next turn. `None` if the enemy died acting or
    /// the combat ended.
    pub next_intent: Option<Intent>,
}

/// What `end_turn` did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// In enemy list order. Only enemies that acted appear.
    pub enemy_actions: Vec<EnemyAction>,
    /// Cards discarded from the hand.
    pub discarded: usize,
    /// The new turn's draw. Empty if the combat ended.
    pub draw: DrawReport,
    /// Turn number after the call.
    pub turn: u32,
    pub status: CombatStatus,
}

/// Returned by `finish` once a combat is done with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    pub outcome: CombatStatus,
    /// Every card from every pile, merged back into a deck.
    pub deck: Deck,
    /// Player with combat-only modifiers cleared.
    pub player: PlayerState,
    pub turns: u32,
}
