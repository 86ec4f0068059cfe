//! Read-only view of a session for rendering.

use serde::{Deserialize, Serialize};

use super::CombatStatus;
use crate::cards::{CardInstance, Cost};
use crate::core::{EnemyState, PlayerState};

/// Everything the UI draws, copied out of a session.
///
/// The draw pile's order is hidden; only its size is exposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatSnapshot {
    pub turn: u32,
    pub status: CombatStatus,
    pub player: PlayerState,
    pub enemies: Vec<EnemyState>,
    pub hand: Vec<HandCard>,
    pub draw_count: usize,
    pub discard: Vec<CardInstance>,
    pub exhaust: Vec<CardInstance>,
}

/// A card in hand plus whether it can be paid for right now.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCard {
    pub card: CardInstance,
    pub affordable: bool,
}

impl HandCard {
    #[must_use]
    pub fn new(card: &CardInstance, energy: u32) -> Self {
        let affordable = match card.cost {
            Cost::Fixed(cost) => cost <= energy,
            Cost::Variable => true,
        };
        Self {
            card: card.clone(),
            affordable,
        }
    }
}

impl CombatSnapshot {
    /// Indices of enemies still standing.
    pub fn living_enemies(&self) -> impl Iterator<Item = usize> + '_ {
        self.enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive())
            .map(|(i, _)| i)
    }

    /// Cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.draw_count + self.discard.len() + self.exhaust.len()
    }
}
