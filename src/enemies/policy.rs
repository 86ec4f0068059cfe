//! Enemy intent policies.
//!
//! After acting, every living enemy asks the session's policy what it will
//! do next. The declared intent is visible to the player for a whole turn
//! before it executes.

use crate::core::{EnemyState, Intent};

/// Decides an enemy's next intent.
pub trait IntentPolicy: Send + Sync {
    /// Next intent for `enemy` on the given floor.
    fn next_intent(&self, enemy: &EnemyState, floor: u32) -> Intent;
}

/// Every enemy attacks for its base damage, every turn.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysAttack;

impl IntentPolicy for AlwaysAttack {
    fn next_intent(&self, enemy: &EnemyState, _floor: u32) -> Intent {
        Intent::Attack {
            amount: enemy.base_damage,
        }
    }
}

impl<P: IntentPolicy + ?Sized> IntentPolicy for Box<P> {
    fn next_intent(&self, enemy: &EnemyState, floor: u32) -> Intent {
        (**self).next_intent(enemy, floor)
    }
}
