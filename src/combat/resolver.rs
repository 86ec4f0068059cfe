//! Card play and enemy phase resolution.
//!
//! The `Resolver` works on borrowed combat state (`Battlefield`) so the
//! session can lend out its fields without giving up ownership.
//!
//! ## Card Resolution Order
//!
//! A validated play pays its cost, then applies effects in a fixed order:
//!
//! 1. Damage (the target, or every living enemy for AOE; X-cost cards hit X times)
//! 2. Block
//! 3. Draw
//! 4. Energy gain (capped at max energy)
//! 5. Strength gain (lasting, then until end of turn)
//! 6. Weak and vulnerable on the targets, thorns on the player
//! 7. The card goes to discard, or to exhaust
//!
//! Validation never mutates. Anything it rejects leaves the state as it was.

use smallvec::SmallVec;

use super::events::{CombatEvent, EventLog};
use super::outcome::{DamageHit, EnemyAction, PlayOutcome};
use super::CombatStatus;
use crate::cards::{CardInstance, Cost};
use crate::core::{attack_damage, EnemyState, GameRng, Intent, PlayError, PlayerState};
use crate::enemies::IntentPolicy;
use crate::zones::{DrawReport, Piles};

/// Mutable view of the state a play or enemy phase touches.
pub struct Battlefield<'a> {
    pub player: &'a mut PlayerState,
    pub enemies: &'a mut [EnemyState],
    pub piles: &'a mut Piles,
    pub rng: &'a mut GameRng,
    pub events: &'a mut EventLog,
}

/// A play that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PlayPlan {
    pub hand_index: usize,
    pub energy_spent: u32,
    /// How many times damage is applied to each target.
    pub repeats: u32,
    /// Enemies receiving damage and debuffs.
    pub targets: SmallVec<[usize; 4]>,
}

/// Resolves card plays and enemy turns.
pub struct Resolver;

impl Resolver {
    /// Check that a play is legal without changing anything.
    ///
    /// Every attack needs a living chosen target, AOE attacks included.
    pub(crate) fn validate(
        player: &PlayerState,
        enemies: &[EnemyState],
        hand: &[CardInstance],
        hand_index: usize,
        target_index: usize,
    ) -> Result<PlayPlan, PlayError> {
        let card = hand.get(hand_index).ok_or(PlayError::InvalidIndex {
            index: hand_index,
            len: hand.len(),
        })?;

        // X = everything left, possibly zero
        let energy_spent = card.cost.resolve(player.energy);
        if !player.can_afford(energy_spent) {
            return Err(PlayError::InsufficientEnergy {
                required: energy_spent,
                available: player.energy,
            });
        }
        let repeats = match card.cost {
            Cost::Fixed(_) => 1,
            Cost::Variable => energy_spent,
        };

        let chosen_is_living = enemies.get(target_index).is_some_and(EnemyState::is_alive);
        if card.needs_target() && !chosen_is_living {
            return Err(PlayError::InvalidTarget {
                index: target_index,
            });
        }

        let targets: SmallVec<[usize; 4]> = if card.effects.aoe {
            enemies
                .iter()
                .enumerate()
                .filter(|(_, e)| e.is_alive())
                .map(|(i, _)| i)
                .collect()
        } else if chosen_is_living {
            smallvec::smallvec![target_index]
        } else {
            SmallVec::new()
        };

        Ok(PlayPlan {
            hand_index,
            energy_spent,
            repeats,
            targets,
        })
    }

    /// Validate and resolve a play.
    pub fn play(
        field: Battlefield<'_>,
        hand_index: usize,
        target_index: usize,
    ) -> Result<PlayOutcome, PlayError> {
        let plan = Self::validate(
            field.player,
            field.enemies,
            field.piles.hand(),
            hand_index,
            target_index,
        )?;
        Self::resolve(field, plan)
    }

    /// Apply a validated play.
    pub(crate) fn resolve(
        field: Battlefield<'_>,
        plan: PlayPlan,
    ) -> Result<PlayOutcome, PlayError> {
        let Battlefield {
            player,
            enemies,
            piles,
            rng,
            events,
        } = field;

        let hand_len = piles.hand().len();
        let card = piles
            .take_from_hand(plan.hand_index)
            .ok_or(PlayError::InvalidIndex {
                index: plan.hand_index,
                len: hand_len,
            })?;
        let effects = card.effects.clone();

        player.spend_energy(plan.energy_spent);
        events.record(CombatEvent::CardPlayed {
            card: card.id.clone(),
            energy_spent: plan.energy_spent,
        });

        // 1. Damage
        let mut hits = SmallVec::<[DamageHit; 4]>::new();
        if effects.damage > 0 {
            for _ in 0..plan.repeats {
                for &target in &plan.targets {
                    let Some(enemy) = enemies.get_mut(target).filter(|e| e.is_alive()) else {
                        continue;
                    };
                    let amount = attack_damage(
                        effects.damage,
                        player.strength,
                        &player.statuses,
                        &enemy.statuses,
                    );
                    let outcome = enemy.take_damage(amount);
                    let killed = !enemy.is_alive();

                    events.record(CombatEvent::DamageDealt {
                        target,
                        amount: outcome.to_health,
                        blocked: outcome.blocked,
                    });
                    if killed {
                        events.record(CombatEvent::EnemyDefeated { target });
                    }
                    hits.push(DamageHit {
                        target,
                        amount,
                        outcome,
                        killed,
                    });
                }
            }
        }

        // 2. Block
        if effects.block > 0 {
            player.add_block(effects.block);
            events.record(CombatEvent::BlockGained {
                amount: effects.block,
            });
        }

        // 3. Draw
        let draw = if effects.draw > 0 {
            let report = piles.draw(effects.draw as usize, rng);
            events.record(CombatEvent::CardsDrawn {
                count: report.drawn,
                reshuffles: report.reshuffles,
            });
            report
        } else {
            DrawReport::default()
        };

        // 4. Energy
        let energy_gained = player.gain_energy(effects.energy_gain);
        if energy_gained > 0 {
            events.record(CombatEvent::EnergyGained {
                amount: energy_gained,
            });
        }

        // 5. Strength
        if effects.strength > 0 {
            let gain = i32::try_from(effects.strength).unwrap_or(i32::MAX);
            player.strength = player.strength.saturating_add(gain);
            events.record(CombatEvent::StrengthGained {
                amount: effects.strength,
            });
        }
        if effects.temporary_strength > 0 {
            let gain = i32::try_from(effects.temporary_strength).unwrap_or(i32::MAX);
            player.gain_temporary_strength(gain);
            events.record(CombatEvent::StrengthGained {
                amount: effects.temporary_strength,
            });
        }

        // 6. Statuses
        let mut debuffed = SmallVec::<[usize; 4]>::new();
        if effects.debuffs() {
            for &target in &plan.targets {
                let Some(enemy) = enemies.get_mut(target).filter(|e| e.is_alive()) else {
                    continue;
                };
                enemy.statuses.weak = enemy.statuses.weak.saturating_add(effects.weak);
                enemy.statuses.vulnerable =
                    enemy.statuses.vulnerable.saturating_add(effects.vulnerable);
                events.record(CombatEvent::StatusApplied {
                    target,
                    weak: effects.weak,
                    vulnerable: effects.vulnerable,
                });
                debuffed.push(target);
            }
        }
        if effects.thorns > 0 {
            player.thorns = player.thorns.saturating_add(effects.thorns);
            events.record(CombatEvent::ThornsGained {
                amount: effects.thorns,
            });
        }

        // 7. Card leaves play
        let played = card.clone();
        if effects.exhaust {
            events.record(CombatEvent::CardExhausted {
                card: card.id.clone(),
            });
            piles.exhaust(card);
        } else {
            piles.discard(card);
        }

        Ok(PlayOutcome {
            card: played,
            energy_spent: plan.energy_spent,
            hits,
            block_gained: effects.block,
            draw,
            energy_gained,
            strength_gained: effects.strength.saturating_add(effects.temporary_strength),
            thorns_gained: effects.thorns,
            debuffed,
            exhausted: effects.exhaust,
            status: CombatStatus::evaluate(player, enemies),
        })
    }

    /// Every living enemy executes its intent, in list order.
    ///
    /// Each enemy drops its old block, acts, ticks its debuffs and declares
    /// its next intent. The phase stops as soon as the combat is decided.
    pub fn enemy_phase<P: IntentPolicy + ?Sized>(
        field: Battlefield<'_>,
        policy: &P,
    ) -> (Vec<EnemyAction>, CombatStatus) {
        let Battlefield {
            player,
            enemies,
            events,
            ..
        } = field;

        let floor = player.floor;
        let mut actions = Vec::with_capacity(enemies.len());
        let mut status = CombatStatus::evaluate(player, enemies);

        for index in 0..enemies.len() {
            if status.is_over() {
                break;
            }
            if !enemies[index].is_alive() {
                continue;
            }

            let enemy = &mut enemies[index];
            enemy.vitals.clear_block();

            let intent = enemy.intent;
            let mut action = EnemyAction {
                enemy: index,
                kind: enemy.kind.clone(),
                intent,
                damage: None,
                thorns: None,
                next_intent: None,
            };

            match intent {
                Intent::Attack { amount } => {
                    let amount =
                        attack_damage(amount, enemy.strength, &enemy.statuses, &player.statuses);
                    let dealt = player.take_damage(amount);
                    events.record(CombatEvent::PlayerDamaged {
                        enemy: index,
                        amount: dealt.to_health,
                        blocked: dealt.blocked,
                    });
                    action.damage = Some(dealt);

                    if !player.is_dead() && player.thorns > 0 {
                        let returned = enemy.take_damage(player.thorns);
                        events.record(CombatEvent::ThornsDealt {
                            enemy: index,
                            amount: returned.to_health,
                        });
                        if !enemy.is_alive() {
                            events.record(CombatEvent::EnemyDefeated { target: index });
                        }
                        action.thorns = Some(returned);
                    }
                }
                Intent::Block { amount } => {
                    enemy.add_block(amount);
                    events.record(CombatEvent::EnemyBlocked {
                        enemy: index,
                        amount,
                    });
                }
                Intent::Buff { amount } => {
                    let gain = i32::try_from(amount).unwrap_or(i32::MAX);
                    enemy.strength = enemy.strength.saturating_add(gain);
                    events.record(CombatEvent::EnemyBuffed {
                        enemy: index,
                        amount,
                    });
                }
            }

            enemy.statuses.tick();

            status = CombatStatus::evaluate(player, enemies);
            let enemy = &mut enemies[index];
            if enemy.is_alive() && !status.is_over() {
                let next = policy.next_intent(enemy, floor);
                enemy.intent = next;
                events.record(CombatEvent::IntentDeclared {
                    enemy: index,
                    intent: next,
                });
                action.next_intent = Some(next);
            }

            actions.push(action);
        }

        (actions, status)
    }
}
