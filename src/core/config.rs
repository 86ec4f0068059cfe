//! Engine configuration.
//!
//! The caller configures the engine at startup by providing:
//! - `PlayerConfig`: Starting vitals and economy for a new run
//! - `ScalingConfig`: How enemy stats grow with the floor number
//! - `RewardWeights`: Rarity odds for card rewards
//! - `CombatConfig`: Combines all configuration
//!
//! Every struct implements `Default` with the values of the shipped game
//! and deserializes with missing fields falling back to those defaults.

use serde::{Deserialize, Serialize};

/// Starting player values for a new run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Maximum (and starting) health.
    pub max_health: u32,
    /// Energy restored at the start of every player turn.
    pub max_energy: u32,
    /// Starting gold.
    pub gold: u32,
    /// Starting floor.
    pub floor: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: 70,
            max_energy: 3,
            gold: 99,
            floor: 1,
        }
    }
}

/// Per-floor growth of enemy stats.
///
/// A stat on floor `f` is `floor(base * (1 + per_floor * (f - 1)))`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingConfig {
    /// Health growth per floor above the first (0.10 = +10%).
    pub health_per_floor: f64,
    /// Damage growth per floor above the first (0.05 = +5%).
    pub damage_per_floor: f64,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            health_per_floor: 0.10,
            damage_per_floor: 0.05,
        }
    }
}

impl ScalingConfig {
    /// Scale a base health value for a floor.
    #[must_use]
    pub fn health(&self, base: u32, floor: u32) -> u32 {
        Self::scale(base, self.health_per_floor, floor)
    }

    /// Scale a base damage value for a floor.
    #[must_use]
    pub fn damage(&self, base: u32, floor: u32) -> u32 {
        Self::scale(base, self.damage_per_floor, floor)
    }

    fn scale(base: u32, per_floor: f64, floor: u32) -> u32 {
        let steps = f64::from(floor.saturating_sub(1));
        let scaled = f64::from(base) * (1.0 + per_floor * steps);
        // Float-to-int `as` saturates, negative growth floors at zero.
        scaled.floor() as u32
    }
}

/// Rarity odds for card rewards.
///
/// `common` and `rare` are independent roll probabilities used by
/// `RewardTable::reward_cards`. All four are relative weights for a single
/// weighted pick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardWeights {
    pub common: f64,
    pub uncommon: f64,
    pub rare: f64,
    pub legendary: f64,
}

impl Default for RewardWeights {
    fn default() -> Self {
        Self {
            common: 0.70,
            uncommon: 0.0,
            rare: 0.25,
            legendary: 0.05,
        }
    }
}

/// Complete engine configuration.
///
/// ```
/// use spire_engine::core::CombatConfig;
///
/// let config = CombatConfig::default()
///     .with_hand_size(6)
///     .with_max_energy(4);
///
/// assert_eq!(config.hand_size, 6);
/// assert_eq!(config.player.max_energy, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Cards drawn at the start of every player turn.
    pub hand_size: usize,

    /// Starting player values.
    pub player: PlayerConfig,

    /// Enemy stat growth per floor.
    pub scaling: ScalingConfig,

    /// Card reward odds.
    pub rewards: RewardWeights,

    /// Minimum and maximum enemies in a regular encounter.
    pub encounter_size: (u32, u32),
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            player: PlayerConfig::default(),
            scaling: ScalingConfig::default(),
            rewards: RewardWeights::default(),
            encounter_size: (1, 3),
        }
    }
}

impl CombatConfig {
    /// Set the number of cards drawn each turn.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the energy restored each turn.
    #[must_use]
    pub fn with_max_energy(mut self, max_energy: u32) -> Self {
        self.player.max_energy = max_energy;
        self
    }

    /// Set the starting player values.
    #[must_use]
    pub fn with_player(mut self, player: PlayerConfig) -> Self {
        self.player = player;
        self
    }

    /// Set enemy floor scaling.
    #[must_use]
    pub fn with_scaling(mut self, scaling: ScalingConfig) -> Self {
        self.scaling = scaling;
        self
    }

    /// Set card reward odds.
    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardWeights) -> Self {
        self.rewards = rewards;
        self
    }

    /// Set encounter size bounds. `min` is raised to at least 1.
    #[must_use]
    pub fn with_encounter_size(mut self, min: u32, max: u32) -> Self {
        let min = min.max(1);
        self.encounter_size = (min, max.max(min));
        self
    }
}
