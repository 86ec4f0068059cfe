//! Structured combat event log.
//!
//! Every state change a session makes is appended to its `EventLog` and
//! mirrored to `tracing`: card plays and terminal results at `debug`, the
//! rest at `trace`. The log is an `im::Vector`, so handing a copy to a UI or
//! replay recorder is cheap.
//!
//! Rejected plays are not recorded. A failed call leaves the session,
//! including its log, exactly as it was.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::CombatStatus;
use crate::cards::CardId;
use crate::core::Intent;

/// Something that happened during a combat.
///
/// Enemy indices refer to the session's enemy list, which never reorders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CombatEvent {
    CombatStarted { enemies: usize, deck_size: usize },
    TurnStarted { turn: u32 },
    CardsDrawn { count: usize, reshuffles: usize },
    StrengthExpired { amount: u32 },
    HandDiscarded { count: usize },

    // === Player actions ===
    CardPlayed { card: CardId, energy_spent: u32 },
    DamageDealt { target: usize, amount: u32, blocked: u32 },
    EnemyDefeated { target: usize },
    BlockGained { amount: u32 },
    EnergyGained { amount: u32 },
    StrengthGained { amount: u32 },
    ThornsGained { amount: u32 },
    StatusApplied { target: usize, weak: u32, vulnerable: u32 },
    CardExhausted { card: CardId },

    // === Enemy phase ===
    PlayerDamaged { enemy: usize, amount: u32, blocked: u32 },
    ThornsDealt { enemy: usize, amount: u32 },
    EnemyBlocked { enemy: usize, amount: u32 },
    EnemyBuffed { enemy: usize, amount: u32 },
    IntentDeclared { enemy: usize, intent: Intent },

    CombatEnded { status: CombatStatus },
}

impl CombatEvent {
    /// Events worth a `debug` line rather than `trace`.
    #[must_use]
    pub const fn is_milestone(&self) -> bool {
        matches!(
            self,
            CombatEvent::CombatStarted { .. }
                | CombatEvent::TurnStarted { .. }
                | CombatEvent::CardPlayed { .. }
                | CombatEvent::EnemyDefeated { .. }
                | CombatEvent::CombatEnded { .. }
        )
    }
}

/// Append-only list of combat events.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vector<CombatEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and mirror it to `tracing`.
    pub fn record(&mut self, event: CombatEvent) {
        if event.is_milestone() {
            debug!(?event, "combat");
        } else {
            trace!(?event, "combat");
        }
        self.events.push_back(event);
    }

    /// Cheap copy of every event so far.
    #[must_use]
    pub fn snapshot(&self) -> Vector<CombatEvent> {
        self.events.clone()
    }

    /// Take every event recorded so far, leaving the log empty.
    pub fn drain(&mut self) -> Vector<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombatEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&CombatEvent> {
        self.events.last()
    }
}
