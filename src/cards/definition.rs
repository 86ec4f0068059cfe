//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type.
//! For example, "Strike" costs 1 and deals 6 damage - these are part of
//! the definition. The copies sitting in piles are `CardInstance`s.

use serde::{Deserialize, Serialize};

use super::attributes::{CardEffects, CardUpgrade};

/// Identifier of a card definition, e.g. `"strike"`.
///
/// This identifies the kind of card, not a copy of it. Five Strikes in a
/// deck share one `CardId`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What kind of card this is. Only attacks need a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Attack,
    Skill,
    Power,
}

/// Card rarity, used by the reward tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    /// All rarities, most common first.
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
    ];
}

/// Energy cost of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cost {
    /// Costs exactly this much energy.
    Fixed(u32),
    /// "X" cost: spends all remaining energy, effects scale with it.
    Variable,
}

impl Cost {
    /// Energy this cost consumes given the player's current energy.
    #[must_use]
    pub const fn resolve(&self, available: u32) -> u32 {
        match self {
            Cost::Fixed(cost) => *cost,
            Cost::Variable => available,
        }
    }
}

impl Default for Cost {
    fn default() -> Self {
        Cost::Fixed(0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use spire_engine::cards::{CardDefinition, CardType, Cost, Rarity};
///
/// let bash = CardDefinition::new("bash", "Bash", CardType::Attack, Rarity::Common)
///     .with_cost(Cost::Fixed(2))
///     .with_damage(8)
///     .with_vulnerable(2);
///
/// assert_eq!(bash.effects.damage, 8);
/// assert_eq!(bash.effects.block, 0); // absent = no effect
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    pub card_type: CardType,
    pub rarity: Rarity,
    pub cost: Cost,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub effects: CardEffects,
    /// Overrides applied when the card is upgraded.
    #[serde(default)]
    pub upgrade: Option<CardUpgrade>,
}

impl CardDefinition {
    /// Create a definition with zero cost and no effects.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        card_type: CardType,
        rarity: Rarity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_type,
            rarity,
            cost: Cost::default(),
            description: String::new(),
            effects: CardEffects::default(),
            upgrade: None,
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.effects.damage = damage;
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: u32) -> Self {
        self.effects.block = block;
        self
    }

    #[must_use]
    pub fn with_strength(mut self, strength: u32) -> Self {
        self.effects.strength = strength;
        self
    }

    /// Strength that wears off when the player ends the turn.
    #[must_use]
    pub fn with_temporary_strength(mut self, strength: u32) -> Self {
        self.effects.temporary_strength = strength;
        self
    }

    #[must_use]
    pub fn with_draw(mut self, draw: u32) -> Self {
        self.effects.draw = draw;
        self
    }

    #[must_use]
    pub fn with_energy_gain(mut self, energy_gain: u32) -> Self {
        self.effects.energy_gain = energy_gain;
        self
    }

    #[must_use]
    pub fn with_weak(mut self, weak: u32) -> Self {
        self.effects.weak = weak;
        self
    }

    #[must_use]
    pub fn with_vulnerable(mut self, vulnerable: u32) -> Self {
        self.effects.vulnerable = vulnerable;
        self
    }

    #[must_use]
    pub fn with_thorns(mut self, thorns: u32) -> Self {
        self.effects.thorns = thorns;
        self
    }

    /// Hit every living enemy instead of one target.
    #[must_use]
    pub fn aoe(mut self) -> Self {
        self.effects.aoe = true;
        self
    }

    /// Remove from the combat once played.
    #[must_use]
    pub fn exhaust(mut self) -> Self {
        self.effects.exhaust = true;
        self
    }

    #[must_use]
    pub fn with_upgrade(mut self, upgrade: CardUpgrade) -> Self {
        self.upgrade = Some(upgrade);
        self
    }
}
