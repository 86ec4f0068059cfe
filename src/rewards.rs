//! Card rewards after a won combat.
//!
//! Each rarity gets an independent roll against its probability in
//! `RewardWeights`, so a reward can offer zero, one or several cards. If
//! every roll misses, the player still gets one common card.
//!
//! ```
//! use spire_engine::cards::CardCatalog;
//! use spire_engine::core::GameRng;
//! use spire_engine::rewards::RewardTable;
//!
//! let catalog = CardCatalog::standard();
//! let mut rng = GameRng::new(3);
//!
//! let rewards = RewardTable::default().reward_cards(&catalog, &mut rng);
//! assert!(!rewards.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::{CardCatalog, CardInstance, Rarity};
use crate::core::{CombatConfig, GameRng, RewardWeights};

/// Rarity-weighted card selection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardTable {
    pub weights: RewardWeights,
}

impl RewardTable {
    #[must_use]
    pub fn new(weights: RewardWeights) -> Self {
        Self { weights }
    }

    /// Reward odds from the engine configuration.
    #[must_use]
    pub fn from_config(config: &CombatConfig) -> Self {
        Self::new(config.rewards.clone())
    }

    /// Probability (or relative weight) configured for a rarity.
    #[must_use]
    pub fn weight(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::Common => self.weights.common,
            Rarity::Uncommon => self.weights.uncommon,
            Rarity::Rare => self.weights.rare,
            Rarity::Legendary => self.weights.legendary,
        }
    }

    /// Roll the post-combat card offer.
    ///
    /// Rarities with no cards in the catalog contribute nothing even when
    /// their roll succeeds.
    pub fn reward_cards(&self, catalog: &CardCatalog, rng: &mut GameRng) -> Vec<CardInstance> {
        let mut rewards = Vec::new();
        for rarity in Rarity::ALL {
            if rng.chance(self.weight(rarity)) {
                rewards.extend(Self::random_by_rarity(catalog, rarity, rng));
            }
        }

        if rewards.is_empty() {
            rewards.extend(Self::random_by_rarity(catalog, Rarity::Common, rng));
        }

        trace!(count = rewards.len(), "rolled card rewards");
        rewards
    }

    /// Uniform pick among cards of one rarity.
    pub fn random_by_rarity(
        catalog: &CardCatalog,
        rarity: Rarity,
        rng: &mut GameRng,
    ) -> Option<CardInstance> {
        let pool = catalog.by_rarity(rarity);
        rng.choose(&pool).map(|def| CardInstance::from_definition(def))
    }

    /// Uniform pick across the whole catalog.
    pub fn random_card(catalog: &CardCatalog, rng: &mut GameRng) -> Option<CardInstance> {
        let mut pool: Vec<_> = catalog.iter().collect();
        pool.sort_by(|a, b| a.id.cmp(&b.id));
        rng.choose(&pool).map(|def| CardInstance::from_definition(def))
    }

    /// Single pick: choose a rarity by relative weight, then a card of it.
    ///
    /// Rarities with no cards are left out of the draw.
    pub fn weighted_pick(&self, catalog: &CardCatalog, rng: &mut GameRng) -> Option<CardInstance> {
        let weights: Vec<f64> = Rarity::ALL
            .iter()
            .map(|&rarity| {
                if catalog.by_rarity(rarity).is_empty() {
                    0.0
                } else {
                    self.weight(rarity)
                }
            })
            .collect();

        let rarity = Rarity::ALL[rng.choose_weighted(&weights)?];
        Self::random_by_rarity(catalog, rarity, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_by_rarity() {
        let catalog = CardCatalog::standard();
        let mut rng = GameRng::new(1);

        for _ in 0..50 {
            let card = RewardTable::random_by_rarity(&catalog, Rarity::Rare, &mut rng).unwrap();
            assert_eq!(card.rarity, Rarity::Rare);
            assert!(!card.upgraded);
        }
        assert!(RewardTable::random_by_rarity(&catalog, Rarity::Legendary, &mut rng).is_none());
    }

    #[test]
    fn test_reward_falls_back_to_common() {
        let table = RewardTable::new(RewardWeights {
            common: 0.0,
            uncommon: 0.0,
            rare: 0.0,
            legendary: 0.0,
        });
        let mut rng = GameRng::new(1);

        let rewards = table.reward_cards(&CardCatalog::standard(), &mut rng);

        assert_eq!(rewards.len(), 1);
        assert_eq!(rewards[0].rarity, Rarity::Common);
    }

    #[test]
    fn test_certain_rolls() {
        let table = RewardTable::new(RewardWeights {
            common: 1.0,
            uncommon: 1.0,
            rare: 1.0,
            legendary: 1.0,
        });
        let mut rng = GameRng::new(1);

        // No uncommon or legendary cards ship
        let rewards = table.reward_cards(&CardCatalog::standard(), &mut rng);
        let rarities: Vec<_> = rewards.iter().map(|c| c.rarity).collect();
        assert_eq!(rarities, vec![Rarity::Common, Rarity::Rare]);
    }

    #[test]
    fn test_from_config() {
        let config = CombatConfig::default().with_rewards(RewardWeights {
            common: 0.0,
            uncommon: 0.0,
            rare: 1.0,
            legendary: 0.0,
        });
        let table = RewardTable::from_config(&config);
        let mut rng = GameRng::new(1);

        let rewards = table.reward_cards(&CardCatalog::standard(), &mut rng);

        assert_eq!(table.weight(Rarity::Rare), 1.0);
        assert_eq!(rewards.len(), 1);
        assert_eq!(rewards[0].rarity, Rarity::Rare);
    }

    #[test]
    fn test_empty_catalog() {
        let mut rng = GameRng::new(1);
        let catalog = CardCatalog::new();

        assert!(RewardTable::default().reward_cards(&catalog, &mut rng).is_empty());
        assert!(RewardTable::random_card(&catalog, &mut rng).is_none());
        assert!(RewardTable::default().weighted_pick(&catalog, &mut rng).is_none());
    }

    #[test]
    fn test_weighted_pick_skips_empty_rarities() {
        let table = RewardTable::new(RewardWeights {
            common: 0.0,
            uncommon: 0.0,
            rare: 0.0,
            legendary: 1.0,
        });
        let mut rng = GameRng::new(1);

        assert!(table.weighted_pick(&CardCatalog::standard(), &mut rng).is_none());

        let table = RewardTable::new(RewardWeights {
            common: 0.0,
            uncommon: 0.0,
            rare: 1.0,
            legendary: 1.0,
        });
        for _ in 0..20 {
            let card = table.weighted_pick(&CardCatalog::standard(), &mut rng).unwrap();
            assert_eq!(card.rarity, Rarity::Rare);
        }
    }
}
