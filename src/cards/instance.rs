//! Card instances - the copies that move between piles.
//!
//! A `CardInstance` is an owned copy of a definition's resolved data. It
//! carries its own upgrade overlay so that upgrading needs no catalog
//! access. Instances have no unique id: identity is the position in a pile,
//! and two unupgraded Strikes compare equal.

use serde::{Deserialize, Serialize};

use super::attributes::{CardEffects, CardUpgrade};
use super::definition::{CardDefinition, CardId, CardType, Cost, Rarity};

/// A card in a deck or pile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    pub id: CardId,
    pub name: String,
    pub card_type: CardType,
    pub rarity: Rarity,
    pub cost: Cost,
    pub description: String,
    pub effects: CardEffects,
    pub upgraded: bool,
    /// Overlay still to apply. Consumed by `upgraded()`.
    #[serde(default)]
    pending_upgrade: Option<CardUpgrade>,
}

impl CardInstance {
    /// Copy a definition into a fresh, unupgraded instance.
    #[must_use]
    pub fn from_definition(def: &CardDefinition) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            card_type: def.card_type,
            rarity: def.rarity,
            cost: def.cost,
            description: def.description.clone(),
            effects: def.effects.clone(),
            upgraded: false,
            pending_upgrade: def.upgrade.clone(),
        }
    }

    /// Upgraded copy of this card.
    ///
    /// Merges the overlay and marks the card upgraded. Upgrading an
    /// upgraded card returns an identical copy.
    #[must_use]
    pub fn upgraded(&self) -> Self {
        let mut card = self.clone();
        card.upgrade_in_place();
        card
    }

    /// Upgrade this instance. Returns `false` if it was already upgraded.
    pub fn upgrade_in_place(&mut self) -> bool {
        if self.upgraded {
            return false;
        }
        if let Some(overlay) = self.pending_upgrade.take() {
            overlay.apply(&mut self.effects, &mut self.cost, &mut self.description);
        }
        self.upgraded = true;
        true
    }

    /// Display name with the conventional `+` suffix once upgraded.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.upgraded {
            format!("{}+", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Does playing this card require a living enemy target?
    ///
    /// Every attack does, AOE included, even though AOE damage then lands
    /// on all living enemies.
    #[must_use]
    pub fn needs_target(&self) -> bool {
        self.card_type == CardType::Attack
    }
}
