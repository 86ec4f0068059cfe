//! The deck template a run carries between combats.

use serde::{Deserialize, Serialize};

use super::instance::CardInstance;
use super::registry::CardCatalog;
use crate::core::{CatalogError, DeckError};

/// Ordered list of card instances owned by the player outside combat.
///
/// A combat copies it into the draw pile and hands back a merged deck when it
/// finishes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<CardInstance>,
}

impl Deck {
    #[must_use]
    pub fn new(cards: Vec<CardInstance>) -> Self {
        Self { cards }
    }

    /// Starter deck from the catalog.
    pub fn starter(catalog: &CardCatalog) -> Result<Self, CatalogError> {
        catalog.starter_deck().map(Self::new)
    }

    /// Add a card, e.g. a combat reward.
    pub fn add(&mut self, card: CardInstance) {
        self.cards.push(card);
    }

    /// Remove and return the card at `index`.
    pub fn remove(&mut self, index: usize) -> Result<CardInstance, DeckError> {
        self.check(index)?;
        Ok(self.cards.remove(index))
    }

    /// Upgrade the card at `index` in place.
    ///
    /// Returns `false` if the card was already upgraded.
    pub fn upgrade(&mut self, index: usize) -> Result<bool, DeckError> {
        self.check(index)?;
        Ok(self.cards[index].upgrade_in_place())
    }

    /// Indices of cards that can still be upgraded.
    pub fn upgradable(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.upgraded)
            .map(|(i, _)| i)
    }

    #[must_use]
    pub fn cards(&self) -> &[CardInstance] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn check(&self, index: usize) -> Result<(), DeckError> {
        if index < self.cards.len() {
            Ok(())
        } else {
            Err(DeckError::InvalidIndex {
                index,
                len: self.cards.len(),
            })
        }
    }
}

impl From<Vec<CardInstance>> for Deck {
    fn from(cards: Vec<CardInstance>) -> Self {
        Self::new(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    #[test]
    fn test_starter() {
        let deck = Deck::starter(&CardCatalog::standard()).unwrap();
        assert_eq!(deck.len(), 10);
        assert_eq!(deck.upgradable().count(), 10);
    }

    #[test]
    fn test_add_and_remove() {
        let catalog = CardCatalog::standard();
        let mut deck = Deck::starter(&catalog).unwrap();

        deck.add(catalog.instantiate(&CardId::new("cleave")).unwrap());
        assert_eq!(deck.len(), 11);

        let removed = deck.remove(10).unwrap();
        assert_eq!(removed.id, CardId::new("cleave"));
        assert_eq!(deck.len(), 10);

        assert_eq!(
            deck.remove(10).unwrap_err(),
            DeckError::InvalidIndex { index: 10, len: 10 }
        );
    }

    #[test]
    fn test_upgrade_slot() {
        let mut deck = Deck::starter(&CardCatalog::standard()).unwrap();

        assert!(deck.upgrade(0).unwrap());
        assert!(!deck.upgrade(0).unwrap());
        assert!(deck.cards()[0].upgraded);
        assert_eq!(deck.upgradable().count(), 9);
        assert!(deck.upgrade(99).is_err());
    }
}
