//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition known to a game. It is
//! built once and then only read: sessions never reach back into it, since
//! instances carry their own data.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardType, Rarity};
use super::instance::CardInstance;
use super::standard;
use crate::core::CatalogError;

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use spire_engine::cards::{CardCatalog, CardDefinition, CardId, CardType, Rarity};
///
/// let mut catalog = CardCatalog::new();
///
/// let bash = CardDefinition::new("bash", "Bash", CardType::Attack, Rarity::Common)
///     .with_damage(8);
///
/// catalog.register(bash).unwrap();
///
/// let found = catalog.lookup(&CardId::new("bash")).unwrap();
/// assert_eq!(found.name, "Bash");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with the shipped card set.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for card in standard::definitions() {
            let registered = catalog.register(card);
            debug_assert!(registered.is_ok(), "duplicate id in the shipped card set");
        }
        catalog
    }

    /// Register a card definition.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), CatalogError> {
        if self.contains(&card.id) {
            return Err(CatalogError::DuplicateCard(card.id));
        }
        self.cards.insert(card.id.clone(), card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn lookup(&self, id: &CardId) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Fresh, unupgraded instance of a card.
    pub fn instantiate(&self, id: &CardId) -> Result<CardInstance, CatalogError> {
        self.lookup(id)
            .map(CardInstance::from_definition)
            .ok_or_else(|| CatalogError::UnknownCard(id.clone()))
    }

    /// Upgraded copy of `card`. Idempotent.
    #[must_use]
    pub fn upgrade(&self, card: &CardInstance) -> CardInstance {
        card.upgraded()
    }

    /// The deck every run starts with: five Strikes and five Defends.
    pub fn starter_deck(&self) -> Result<Vec<CardInstance>, CatalogError> {
        standard::STARTER_DECK
            .iter()
            .flat_map(|&(id, count)| std::iter::repeat(id).take(count))
            .map(|id| self.instantiate(&CardId::new(id)))
            .collect()
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Definitions of a given rarity, sorted by id.
    ///
    /// Sorted so that seeded picks do not depend on hash order.
    #[must_use]
    pub fn by_rarity(&self, rarity: Rarity) -> Vec<&CardDefinition> {
        self.sorted(|c| c.rarity == rarity)
    }

    /// Definitions of a given type, sorted by id.
    #[must_use]
    pub fn by_type(&self, card_type: CardType) -> Vec<&CardDefinition> {
        self.sorted(|c| c.card_type == card_type)
    }

    fn sorted<F>(&self, predicate: F) -> Vec<&CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        let mut found: Vec<_> = self.cards.values().filter(|c| predicate(c)).collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, rarity: Rarity) -> CardDefinition {
        CardDefinition::new(id, id.to_uppercase(), CardType::Attack, rarity)
    }

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = CardCatalog::new();
        catalog.register(card("a", Rarity::Common)).unwrap();

        assert!(catalog.lookup(&CardId::new("a")).is_some());
        assert!(catalog.contains(&CardId::new("a")));
        assert!(catalog.lookup(&CardId::new("zzz")).is_none());
        assert!(!catalog.contains(&CardId::new("zzz")));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = CardCatalog::new();
        catalog.register(card("a", Rarity::Common)).unwrap();

        let err = catalog.register(card("a", Rarity::Rare)).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCard(CardId::new("a")));
        assert_eq!(catalog.lookup(&CardId::new("a")).unwrap().rarity, Rarity::Common);
    }

    #[test]
    fn test_instantiate_unknown() {
        let catalog = CardCatalog::new();
        let err = catalog.instantiate(&CardId::new("ghost")).unwrap_err();
        assert_eq!(err, CatalogError::UnknownCard(CardId::new("ghost")));
    }

    #[test]
    fn test_by_rarity_sorted() {
        let mut catalog = CardCatalog::new();
        catalog.register(card("c", Rarity::Rare)).unwrap();
        catalog.register(card("a", Rarity::Rare)).unwrap();
        catalog.register(card("b", Rarity::Common)).unwrap();

        let rares: Vec<_> = catalog
            .by_rarity(Rarity::Rare)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(rares, vec!["a", "c"]);
    }

    #[test]
    fn test_standard_catalog() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.len(), standard::definitions().len());
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.by_type(CardType::Power).len(), 2);
    }

    #[test]
    fn test_starter_deck() {
        let catalog = CardCatalog::standard();
        let deck = catalog.starter_deck().unwrap();

        assert_eq!(deck.len(), 10);
        let strikes = deck.iter().filter(|c| c.id.as_str() == "strike").count();
        let defends = deck.iter().filter(|c| c.id.as_str() == "defend").count();
        assert_eq!(strikes, 5);
        assert_eq!(defends, 5);
        assert!(deck.iter().all(|c| !c.upgraded));
    }

    #[test]
    fn test_catalog_upgrade_idempotent() {
        let catalog = CardCatalog::standard();
        let strike = catalog.instantiate(&CardId::new("strike")).unwrap();

        let once = catalog.upgrade(&strike);
        assert_eq!(once.effects.damage, 9);
        assert_eq!(catalog.upgrade(&once), once);
    }
}
