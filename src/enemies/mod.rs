//! Enemies: intent policies and the spawnable roster.
//!
//! ## Key Types
//!
//! - `IntentPolicy`: Chooses each enemy's next intent
//! - `AlwaysAttack`: Default policy, attack for base damage
//! - `Bestiary`: Templates, floor scaling, random/elite/boss spawning

pub mod bestiary;
pub mod policy;

pub use bestiary::{Bestiary, EnemyTemplate};
pub use policy::{AlwaysAttack, IntentPolicy};
