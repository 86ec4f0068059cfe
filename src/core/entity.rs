//! Health, block and status bookkeeping shared by players and enemies.
//!
//! ## Damage Order
//!
//! Block is consumed first. Whatever block does not absorb reduces health,
//! floored at zero:
//!
//! ```
//! use spire_engine::core::Vitals;
//!
//! let mut vitals = Vitals::new(70);
//! vitals.add_block(6);
//!
//! let outcome = vitals.take_damage(10);
//! assert_eq!(outcome.to_health, 4);
//! assert_eq!(outcome.blocked, 6);
//! assert_eq!(vitals.block, 0);
//! assert_eq!(vitals.current_health, 66);
//! ```

use serde::{Deserialize, Serialize};

/// Result of applying damage to a combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DamageOutcome {
    /// Damage that reached health.
    pub to_health: u32,
    /// Damage absorbed by block.
    pub blocked: u32,
}

impl DamageOutcome {
    /// Total damage that was dealt, absorbed or not.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.to_health + self.blocked
    }
}

/// Health and block of a combat participant.
///
/// Invariant: `current_health <= max_health`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vitals {
    pub max_health: u32,
    pub current_health: u32,
    pub block: u32,
}

impl Vitals {
    /// Full health, no block.
    #[must_use]
    pub const fn new(max_health: u32) -> Self {
        Self {
            max_health,
            current_health: max_health,
            block: 0,
        }
    }

    /// Is this entity still standing?
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Apply damage, consuming block first.
    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        let blocked = amount.min(self.block);
        self.block -= blocked;

        // Overkill is not reported, only health actually lost
        let to_health = (amount - blocked).min(self.current_health);
        self.current_health -= to_health;

        DamageOutcome { to_health, blocked }
    }

    /// Restore health up to the maximum. Returns the amount restored.
    ///
    /// Healing a dead entity does nothing.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let healed = amount.min(self.max_health - self.current_health);
        self.current_health += healed;
        healed
    }

    /// Gain block. There is no upper cap.
    pub fn add_block(&mut self, amount: u32) {
        self.block = self.block.saturating_add(amount);
    }

    /// Drop all block.
    pub fn clear_block(&mut self) {
        self.block = 0;
    }
}

/// Turn-limited debuffs.
///
/// Each counter is the number of owner turns the debuff lasts; `tick`
/// runs once at the end of the owner's turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statuses {
    /// Outgoing attack damage is reduced by a quarter.
    pub weak: u32,
    /// Incoming attack damage is increased by half.
    pub vulnerable: u32,
}

impl Statuses {
    /// Count down every active debuff by one turn.
    pub fn tick(&mut self) {
        self.weak = self.weak.saturating_sub(1);
        self.vulnerable = self.vulnerable.saturating_sub(1);
    }

    #[must_use]
    pub const fn is_weak(&self) -> bool {
        self.weak > 0
    }

    #[must_use]
    pub const fn is_vulnerable(&self) -> bool {
        self.vulnerable > 0
    }
}

/// Damage of a single attack after modifiers.
///
/// `max(0, base + strength)`, then `x0.75` if the attacker is weak and
/// `x1.5` if the defender is vulnerable, each step rounded down.
#[must_use]
pub fn attack_damage(base: u32, strength: i32, attacker: &Statuses, defender: &Statuses) -> u32 {
    let mut damage = (i64::from(base) + i64::from(strength)).max(0) as u64;
    if attacker.is_weak() {
        damage = damage * 3 / 4;
    }
    if defender.is_vulnerable() {
        damage = damage * 3 / 2;
    }
    u32::try_from(damage).unwrap_or(u32::MAX)
}
