//! Card effect schema and upgrade overlays.
//!
//! Every card shares one fixed set of effect fields. An absent field means
//! "no effect": numbers default to 0 and flags to `false`, so a card only
//! lists what it actually does.
//!
//! ## Fields
//!
//! - `damage`: Attack damage per hit (single target, or all with `aoe`)
//! - `block`: Block gained by the player
//! - `strength`: Strength gained by the player for the rest of combat
//! - `temporary_strength`: Strength gained until the end of the player's turn
//! - `draw`: Cards drawn
//! - `energy_gain`: Energy gained (capped at max energy)
//! - `weak` / `vulnerable`: Turns of debuff put on the targeted enemies
//! - `thorns`: Thorns gained by the player
//! - `aoe`: Damage and debuffs hit every living enemy
//! - `exhaust`: Card leaves the combat after it is played

use serde::{Deserialize, Serialize};

use super::definition::Cost;

/// Numeric and flag effects of a card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CardEffects {
    pub damage: u32,
    pub block: u32,
    pub strength: u32,
    pub temporary_strength: u32,
    pub draw: u32,
    pub energy_gain: u32,
    pub weak: u32,
    pub vulnerable: u32,
    pub thorns: u32,
    pub aoe: bool,
    pub exhaust: bool,
}

impl CardEffects {
    /// Does this card put a debuff on enemies?
    #[must_use]
    pub const fn debuffs(&self) -> bool {
        self.weak > 0 || self.vulnerable > 0
    }
}

/// Sparse overrides applied once when a card is upgraded.
///
/// `None` leaves the base value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CardUpgrade {
    pub cost: Option<Cost>,
    pub description: Option<String>,
    pub damage: Option<u32>,
    pub block: Option<u32>,
    pub strength: Option<u32>,
    pub temporary_strength: Option<u32>,
    pub draw: Option<u32>,
    pub energy_gain: Option<u32>,
    pub weak: Option<u32>,
    pub vulnerable: Option<u32>,
    pub thorns: Option<u32>,
    pub aoe: Option<bool>,
    pub exhaust: Option<bool>,
}

impl CardUpgrade {
    /// Empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cost(mut self, cost: Cost) -> Self {
        self.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn damage(mut self, damage: u32) -> Self {
        self.damage = Some(damage);
        self
    }

    #[must_use]
    pub fn block(mut self, block: u32) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub fn strength(mut self, strength: u32) -> Self {
        self.strength = Some(strength);
        self
    }

    #[must_use]
    pub fn temporary_strength(mut self, strength: u32) -> Self {
        self.temporary_strength = Some(strength);
        self
    }

    #[must_use]
    pub fn draw(mut self, draw: u32) -> Self {
        self.draw = Some(draw);
        self
    }

    /// Write the overrides into `effects`, `cost` and `description`.
    pub fn apply(&self, effects: &mut CardEffects, cost: &mut Cost, description: &mut String) {
        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        set(cost, &self.cost);
        set(description, &self.description);
        set(&mut effects.damage, &self.damage);
        set(&mut effects.block, &self.block);
        set(&mut effects.strength, &self.strength);
        set(&mut effects.temporary_strength, &self.temporary_strength);
        set(&mut effects.draw, &self.draw);
        set(&mut effects.energy_gain, &self.energy_gain);
        set(&mut effects.weak, &self.weak);
        set(&mut effects.vulnerable, &self.vulnerable);
        set(&mut effects.thorns, &self.thorns);
        set(&mut effects.aoe, &self.aoe);
        set(&mut effects.exhaust, &self.exhaust);
    }
}
