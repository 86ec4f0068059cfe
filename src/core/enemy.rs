//! Enemy combat records and their declared intents.

use serde::{Deserialize, Serialize};

use super::entity::{DamageOutcome, Statuses, Vitals};

/// What an enemy will do on its next turn, shown to the player in advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Attack the player for `amount` (before strength and statuses).
    Attack { amount: u32 },
    /// Gain `amount` block.
    Block { amount: u32 },
    /// Gain `amount` strength.
    Buff { amount: u32 },
}

impl Intent {
    /// Tag used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Intent::Attack { .. } => "attack",
            Intent::Block { .. } => "block",
            Intent::Buff { .. } => "buff",
        }
    }

    #[must_use]
    pub const fn amount(&self) -> u32 {
        match self {
            Intent::Attack { amount } | Intent::Block { amount } | Intent::Buff { amount } => {
                *amount
            }
        }
    }
}

/// A single enemy in a combat.
///
/// `is_alive()` is derived from health, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyState {
    /// Template tag, e.g. `"goblin"` or `"boss_dragon"`.
    pub kind: String,
    pub vitals: Vitals,
    /// Damage of a plain attack, already scaled for the floor.
    pub base_damage: u32,
    pub intent: Intent,
    /// Bonus from `Buff` intents.
    pub strength: i32,
    pub statuses: Statuses,
}

impl EnemyState {
    /// New enemy at full health, intending to attack for `base_damage`.
    #[must_use]
    pub fn new(kind: impl Into<String>, max_health: u32, base_damage: u32) -> Self {
        Self {
            kind: kind.into(),
            vitals: Vitals::new(max_health),
            base_damage,
            intent: Intent::Attack { amount: base_damage },
            strength: 0,
            statuses: Statuses::default(),
        }
    }

    /// Replace the declared intent (builder pattern).
    #[must_use]
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.vitals.is_alive()
    }

    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        self.vitals.take_damage(amount)
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        self.vitals.heal(amount)
    }

    pub fn add_block(&mut self, amount: u32) {
        self.vitals.add_block(amount);
    }
}
