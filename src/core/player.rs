//! Player state carried through a run and mutated during combat.

use serde::{Deserialize, Serialize};

use super::config::PlayerConfig;
use super::entity::{DamageOutcome, Statuses, Vitals};

/// The player's combat-relevant record.
///
/// Invariants:
/// - `vitals.current_health <= vitals.max_health`
/// - `energy <= max_energy`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    pub vitals: Vitals,

    /// Energy restored at the start of each turn.
    pub max_energy: u32,
    /// Energy left this turn.
    pub energy: u32,

    pub gold: u32,
    pub floor: u32,

    /// Flat bonus added to every attack's damage. Can go negative.
    pub strength: i32,
    /// Part of `strength` that wears off at the end of the player's turn.
    pub temporary_strength: i32,
    /// Damage dealt back to an enemy each time it attacks the player.
    pub thorns: u32,
    pub statuses: Statuses,

    /// Keep block across the turn boundary.
    ///
    /// No shipped card sets this yet.
    pub retain_block: bool,
}

impl PlayerState {
    /// Fresh player for a new run.
    #[must_use]
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            vitals: Vitals::new(config.max_health),
            max_energy: config.max_energy,
            energy: config.max_energy,
            gold: config.gold,
            floor: config.floor,
            strength: 0,
            temporary_strength: 0,
            thorns: 0,
            statuses: Statuses::default(),
            retain_block: false,
        }
    }

    #[must_use]
    pub const fn is_dead(&self) -> bool {
        !self.vitals.is_alive()
    }

    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        self.vitals.take_damage(amount)
    }

    /// Heal; a dead player stays dead.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.vitals.heal(amount)
    }

    pub fn add_block(&mut self, amount: u32) {
        self.vitals.add_block(amount);
    }

    /// Can the player pay `cost` energy right now?
    #[must_use]
    pub const fn can_afford(&self, cost: u32) -> bool {
        self.energy >= cost
    }

    /// Spend energy. Callers check `can_afford` first.
    pub fn spend_energy(&mut self, cost: u32) {
        debug_assert!(self.can_afford(cost), "spent more energy than available");
        self.energy = self.energy.saturating_sub(cost);
    }

    /// Gain energy, capped at `max_energy`. Returns the amount gained.
    pub fn gain_energy(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_energy - self.energy);
        self.energy += gained;
        gained
    }

    /// Gain strength until the end of this turn.
    pub fn gain_temporary_strength(&mut self, amount: i32) {
        self.strength = self.strength.saturating_add(amount);
        self.temporary_strength = self.temporary_strength.saturating_add(amount);
    }

    /// End-of-turn cleanup: temporary strength wears off. Returns the
    /// amount removed.
    pub fn end_turn(&mut self) -> i32 {
        let expired = std::mem::take(&mut self.temporary_strength);
        self.strength = self.strength.saturating_sub(expired);
        expired
    }

    /// Start-of-turn reset: full energy, block expires unless retained.
    pub fn begin_turn(&mut self) {
        self.energy = self.max_energy;
        if !self.retain_block {
            self.vitals.clear_block();
        }
    }

    /// Drop combat-only modifiers once a fight ends.
    pub fn leave_combat(&mut self) {
        self.energy = self.max_energy;
        self.vitals.clear_block();
        self.strength = 0;
        self.temporary_strength = 0;
        self.thorns = 0;
        self.statuses = Statuses::default();
        self.retain_block = false;
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(&PlayerConfig::default())
    }
}
