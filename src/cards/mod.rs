//! Card system: definitions, instances, catalog and deck template.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Static card data with a fixed effect schema
//! - `CardEffects` / `CardUpgrade`: Effect fields and their upgrade overlay
//! - `CardInstance`: A copy in a pile, possibly upgraded
//! - `CardCatalog`: Definition lookup, preloaded via `CardCatalog::standard()`
//! - `Deck`: The run's deck template between combats

pub mod attributes;
pub mod deck;
pub mod definition;
pub mod instance;
pub mod registry;
pub mod standard;

pub use attributes::{CardEffects, CardUpgrade};
pub use deck::Deck;
pub use definition::{CardDefinition, CardId, CardType, Cost, Rarity};
pub use instance::CardInstance;
pub use registry::CardCatalog;
