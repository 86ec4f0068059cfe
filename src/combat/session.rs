//! The combat session state machine.
//!
//! A `CombatSession` owns one fight: the player, the enemies, the four card
//! piles, a seeded RNG and the event log. The caller drives it with
//! `play_card` and `end_turn` and reads it back through `snapshot`.
//!
//! ## Turn Structure
//!
//! Turn 0 starts inside `start`: full energy, no block, a fresh hand.
//! `end_turn` then runs, in order:
//!
//! 1. Temporary strength wears off and the hand is discarded
//! 2. Enemy phase: each living enemy, in list order, drops its block,
//!    executes its intent, ticks its debuffs and declares its next intent
//! 3. Turn counter +1
//! 4. Player reset: energy to max, block to zero (unless retained),
//!    player debuffs tick
//! 5. Draw a new hand
//!
//! If the combat is decided during step 2 the remaining steps are skipped.
//!
//! ## Example
//!
//! ```
//! use spire_engine::cards::CardCatalog;
//! use spire_engine::combat::{CombatSession, CombatStatus};
//! use spire_engine::core::{CombatConfig, EnemyState, PlayerState};
//!
//! let deck = CardCatalog::standard().starter_deck().unwrap();
//! let enemies = vec![EnemyState::new("rat", 12, 4)];
//!
//! let mut session = CombatSession::start(
//!     &deck,
//!     enemies,
//!     PlayerState::default(),
//!     CombatConfig::default(),
//!     42,
//! );
//! assert_eq!(session.piles().hand().len(), 5);
//!
//! let report = session.end_turn().unwrap();
//! assert_eq!(report.turn, 1);
//! assert_eq!(session.player().vitals.current_health, 66);
//! assert_eq!(session.status(), CombatStatus::Ongoing);
//! ```

use im::Vector;
use tracing::{debug, debug_span};

use super::events::{CombatEvent, EventLog};
use super::outcome::{CombatReport, PlayOutcome, TurnReport};
use super::resolver::{Battlefield, Resolver};
use super::snapshot::{CombatSnapshot, HandCard};
use super::CombatStatus;
use crate::cards::{CardInstance, Deck};
use crate::core::{CombatConfig, EnemyState, GameRng, PlayError, PlayerState};
use crate::enemies::{AlwaysAttack, IntentPolicy};
use crate::zones::{DrawReport, Piles};

/// One fight, from deal to result.
#[derive(Clone, Debug)]
pub struct CombatSession<P: IntentPolicy = AlwaysAttack> {
    player: PlayerState,
    enemies: Vec<EnemyState>,
    piles: Piles,
    /// Cards across all piles; constant for the whole fight.
    deck_size: usize,
    turn: u32,
    status: CombatStatus,
    policy: P,
    rng: GameRng,
    config: CombatConfig,
    events: EventLog,
}

impl CombatSession<AlwaysAttack> {
    /// Start a combat with enemies that always attack.
    ///
    /// The deck template is copied and shuffled into the draw pile, the
    /// player gets full energy and no block, and the opening hand is drawn.
    /// Enemies keep the intents they were created with.
    ///
    /// Energy per turn comes from `config.player.max_energy`. Health, gold
    /// and floor are carried by `player`; a new run starts from
    /// `PlayerState::new(&config.player)`.
    #[must_use]
    pub fn start(
        deck: &[CardInstance],
        enemies: Vec<EnemyState>,
        player: PlayerState,
        config: CombatConfig,
        seed: u64,
    ) -> Self {
        Self::start_with_policy(deck, enemies, player, config, seed, AlwaysAttack)
    }
}

impl<P: IntentPolicy> CombatSession<P> {
    /// Start a combat whose enemies pick intents with `policy`.
    #[must_use]
    pub fn start_with_policy(
        deck: &[CardInstance],
        enemies: Vec<EnemyState>,
        mut player: PlayerState,
        config: CombatConfig,
        seed: u64,
        policy: P,
    ) -> Self {
        let _span = debug_span!("combat_start", seed, enemies = enemies.len()).entered();

        let mut rng = GameRng::new(seed);
        let mut piles = Piles::start_combat(deck, &mut rng);
        let mut events = EventLog::new();

        player.max_energy = config.player.max_energy;
        player.energy = player.max_energy;
        player.vitals.clear_block();

        events.record(CombatEvent::CombatStarted {
            enemies: enemies.len(),
            deck_size: deck.len(),
        });
        events.record(CombatEvent::TurnStarted { turn: 0 });

        let draw = piles.draw(config.hand_size, &mut rng);
        events.record(CombatEvent::CardsDrawn {
            count: draw.drawn,
            reshuffles: draw.reshuffles,
        });

        let status = CombatStatus::evaluate(&player, &enemies);
        if status.is_over() {
            events.record(CombatEvent::CombatEnded { status });
        }

        Self {
            player,
            enemies,
            piles,
            deck_size: deck.len(),
            turn: 0,
            status,
            policy,
            rng,
            config,
            events,
        }
    }

    /// Swap the intent policy. Current intents stay as declared.
    #[must_use]
    pub fn with_policy<Q: IntentPolicy>(self, policy: Q) -> CombatSession<Q> {
        CombatSession {
            player: self.player,
            enemies: self.enemies,
            piles: self.piles,
            deck_size: self.deck_size,
            turn: self.turn,
            status: self.status,
            policy,
            rng: self.rng,
            config: self.config,
            events: self.events,
        }
    }

    // === Player input ===

    /// Play the card at `hand_index`, aimed at enemy `target_index`.
    ///
    /// Attacks need a living target, even AOE ones that then hit every
    /// living enemy. Other cards ignore the target unless they debuff. On
    /// error nothing changes.
    pub fn play_card(
        &mut self,
        hand_index: usize,
        target_index: usize,
    ) -> Result<PlayOutcome, PlayError> {
        let _span = debug_span!("play_card", turn = self.turn, hand_index, target_index).entered();

        self.ensure_ongoing()?;

        let result = Resolver::play(self.field(), hand_index, target_index);
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(reason = err.reason(), %err, "play rejected");
                return Err(err);
            }
        };

        debug!(
            card = %outcome.card.display_name(),
            energy = outcome.energy_spent,
            damage = outcome.total_damage(),
            "card played"
        );
        self.settle(outcome.status);
        self.check_conservation();
        Ok(outcome)
    }

    /// End the player's turn, run the enemy phase and start the next turn.
    pub fn end_turn(&mut self) -> Result<TurnReport, PlayError> {
        let _span = debug_span!("end_turn", turn = self.turn).entered();

        self.ensure_ongoing()?;

        let expired = self.player.end_turn();
        if expired > 0 {
            self.events.record(CombatEvent::StrengthExpired {
                amount: expired.unsigned_abs(),
            });
        }

        let discarded = self.piles.discard_hand();
        self.events
            .record(CombatEvent::HandDiscarded { count: discarded });

        let (enemy_actions, status) = {
            let Self {
                player,
                enemies,
                piles,
                rng,
                events,
                policy,
                ..
            } = self;
            let field = Battlefield {
                player,
                enemies,
                piles,
                rng,
                events,
            };
            Resolver::enemy_phase(field, &*policy)
        };

        self.settle(status);
        if status.is_over() {
            self.check_conservation();
            return Ok(TurnReport {
                enemy_actions,
                discarded,
                draw: DrawReport::default(),
                turn: self.turn,
                status,
            });
        }

        self.turn += 1;
        self.events.record(CombatEvent::TurnStarted { turn: self.turn });

        self.player.begin_turn();
        self.player.statuses.tick();

        let draw = self.piles.draw(self.config.hand_size, &mut self.rng);
        self.events.record(CombatEvent::CardsDrawn {
            count: draw.drawn,
            reshuffles: draw.reshuffles,
        });

        self.check_conservation();
        Ok(TurnReport {
            enemy_actions,
            discarded,
            draw,
            turn: self.turn,
            status,
        })
    }

    /// End the combat and merge every pile back into a deck.
    ///
    /// Exhausted cards return to the deck. The player's combat-only
    /// modifiers are cleared.
    #[must_use]
    pub fn finish(self) -> CombatReport {
        debug!(status = %self.status, turns = self.turn, "combat finished");

        let mut player = self.player;
        player.leave_combat();

        CombatReport {
            outcome: self.status,
            deck: Deck::new(self.piles.into_deck()),
            player,
            turns: self.turn,
        }
    }

    // === Queries ===

    /// Every enemy is at zero health.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.enemies.iter().all(|e| !e.is_alive())
    }

    #[must_use]
    pub fn is_defeat(&self) -> bool {
        self.player.is_dead()
    }

    #[must_use]
    pub const fn status(&self) -> CombatStatus {
        self.status
    }

    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub const fn player(&self) -> &PlayerState {
        &self.player
    }

    #[must_use]
    pub fn enemies(&self) -> &[EnemyState] {
        &self.enemies
    }

    #[must_use]
    pub const fn piles(&self) -> &Piles {
        &self.piles
    }

    #[must_use]
    pub const fn config(&self) -> &CombatConfig {
        &self.config
    }

    #[must_use]
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Indices of enemies still standing.
    pub fn living_enemies(&self) -> impl Iterator<Item = usize> + '_ {
        self.enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive())
            .map(|(i, _)| i)
    }

    /// Would `play_card(hand_index, target_index)` succeed right now?
    pub fn check_play(&self, hand_index: usize, target_index: usize) -> Result<(), PlayError> {
        self.ensure_ongoing()?;
        Resolver::validate(
            &self.player,
            &self.enemies,
            self.piles.hand(),
            hand_index,
            target_index,
        )
        .map(|_| ())
    }

    /// Events recorded so far.
    #[must_use]
    pub const fn events(&self) -> &EventLog {
        &self.events
    }

    /// Take the recorded events, e.g. once per rendered frame.
    pub fn drain_events(&mut self) -> Vector<CombatEvent> {
        self.events.drain()
    }

    /// Read-only copy of everything the UI renders.
    #[must_use]
    pub fn snapshot(&self) -> CombatSnapshot {
        CombatSnapshot {
            turn: self.turn,
            status: self.status,
            player: self.player.clone(),
            enemies: self.enemies.clone(),
            hand: self
                .piles
                .hand()
                .iter()
                .map(|card| HandCard::new(card, self.player.energy))
                .collect(),
            draw_count: self.piles.draw_pile().len(),
            discard: self.piles.discard_pile().to_vec(),
            exhaust: self.piles.exhaust_pile().to_vec(),
        }
    }

    // === Internals ===

    fn ensure_ongoing(&self) -> Result<(), PlayError> {
        if self.status.is_over() {
            return Err(PlayError::CombatOver {
                status: self.status,
            });
        }
        Ok(())
    }

    fn field(&mut self) -> Battlefield<'_> {
        Battlefield {
            player: &mut self.player,
            enemies: &mut self.enemies,
            piles: &mut self.piles,
            rng: &mut self.rng,
            events: &mut self.events,
        }
    }

    fn settle(&mut self, status: CombatStatus) {
        if status.is_over() && !self.status.is_over() {
            self.events.record(CombatEvent::CombatEnded { status });
        }
        self.status = status;
    }

    fn check_conservation(&self) {
        debug_assert_eq!(
            self.piles.total(),
            self.deck_size,
            "cards were created or lost between piles"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, CardId};
    use crate::core::Intent;

    fn cards(ids: &[&str]) -> Vec<CardInstance> {
        let catalog = CardCatalog::standard();
        ids.iter()
            .map(|id| catalog.instantiate(&CardId::new(*id)).unwrap())
            .collect()
    }

    fn session(deck: &[&str], enemies: Vec<EnemyState>) -> CombatSession {
        CombatSession::start(
            &cards(deck),
            enemies,
            PlayerState::default(),
            CombatConfig::default(),
            7,
        )
    }

    fn hand_index(session: &CombatSession, id: &str) -> usize {
        session
            .piles()
            .hand()
            .iter()
            .position(|c| c.id.as_str() == id)
            .unwrap()
    }

    #[test]
    fn test_start_deals_hand() {
        let s = session(&["strike"; 8], vec![EnemyState::new("rat", 12, 4)]);

        assert_eq!(s.turn(), 0);
        assert_eq!(s.piles().hand().len(), 5);
        assert_eq!(s.piles().draw_pile().len(), 3);
        assert_eq!(s.player().energy, 3);
        assert_eq!(s.status(), CombatStatus::Ongoing);
    }

    #[test]
    fn test_start_without_living_enemies_is_victory() {
        let s = session(&["strike"], vec![]);
        assert_eq!(s.status(), CombatStatus::Victory);
        assert!(s.is_victory());
    }

    #[test]
    fn test_failed_play_changes_nothing() {
        let mut s = session(&["heavy_strike"; 5], vec![EnemyState::new("goblin", 25, 8)]);
        s.play_card(0, 0).unwrap();
        let before = s.snapshot();
        let events_before = s.events().len();

        let err = s.play_card(0, 0).unwrap_err();

        assert_eq!(
            err,
            PlayError::InsufficientEnergy {
                required: 2,
                available: 1
            }
        );
        assert_eq!(s.snapshot(), before);
        assert_eq!(s.events().len(), events_before);
    }

    #[test]
    fn test_invalid_target() {
        let mut s = session(&["strike"; 5], vec![EnemyState::new("rat", 12, 4)]);

        assert_eq!(
            s.play_card(0, 3).unwrap_err(),
            PlayError::InvalidTarget { index: 3 }
        );
        assert_eq!(
            s.play_card(9, 0).unwrap_err(),
            PlayError::InvalidIndex { index: 9, len: 5 }
        );
    }

    #[test]
    fn test_killing_blow_ends_combat() {
        let mut s = session(&["heavy_strike"; 5], vec![EnemyState::new("rat", 12, 4)]);

        let outcome = s.play_card(0, 0).unwrap();

        assert_eq!(outcome.status, CombatStatus::Victory);
        assert!(s.is_victory());
        assert_eq!(
            s.play_card(0, 0).unwrap_err(),
            PlayError::CombatOver {
                status: CombatStatus::Victory
            }
        );
        assert!(s.end_turn().is_err());
        assert_eq!(
            s.events().last(),
            Some(&CombatEvent::CombatEnded {
                status: CombatStatus::Victory
            })
        );
    }

    #[test]
    fn test_end_turn_resets_player() {
        let mut s = session(&["defend"; 10], vec![EnemyState::new("rat", 12, 4)]);
        s.play_card(0, 0).unwrap();
        s.play_card(0, 0).unwrap();
        assert_eq!(s.player().vitals.block, 10);

        let report = s.end_turn().unwrap();

        // Block soaked the rat's attack, then expired
        assert_eq!(report.enemy_actions[0].damage.unwrap().blocked, 4);
        assert_eq!(s.player().vitals.current_health, 70);
        assert_eq!(s.player().vitals.block, 0);
        assert_eq!(s.player().energy, 3);
        assert_eq!(s.piles().hand().len(), 5);
        assert_eq!(report.turn, 1);
        assert_eq!(report.discarded, 3);
    }

    #[test]
    fn test_defeat() {
        let mut s = session(&["strike"; 5], vec![EnemyState::new("ogre", 100, 80)]);

        let report = s.end_turn().unwrap();

        assert_eq!(report.status, CombatStatus::Defeat);
        assert!(s.is_defeat());
        assert_eq!(s.turn(), 0);
        assert!(s.piles().hand().is_empty());
    }

    #[test]
    fn test_dead_enemies_skip_their_turn() {
        let mut s = session(
            &["heavy_strike"; 5],
            vec![EnemyState::new("rat", 12, 4), EnemyState::new("bat", 18, 6)],
        );
        s.play_card(0, 0).unwrap();

        let report = s.end_turn().unwrap();

        assert_eq!(report.enemy_actions.len(), 1);
        assert_eq!(report.enemy_actions[0].enemy, 1);
        assert_eq!(s.player().vitals.current_health, 64);
    }

    #[test]
    fn test_shrug_it_off_draws() {
        let mut deck = vec!["strike"; 9];
        deck.push("shrug_it_off");
        let mut s = CombatSession::start(
            &cards(&deck),
            vec![EnemyState::new("rat", 12, 4)],
            PlayerState::default(),
            CombatConfig::default().with_hand_size(10),
            3,
        );

        let idx = hand_index(&s, "shrug_it_off");
        let outcome = s.play_card(idx, 0).unwrap();

        // Whole deck is already in hand
        assert_eq!(outcome.block_gained, 8);
        assert_eq!(outcome.draw.drawn, 0);
        assert_eq!(s.piles().hand().len(), 9);
    }

    #[test]
    fn test_custom_policy() {
        struct Turtle;
        impl IntentPolicy for Turtle {
            fn next_intent(&self, _enemy: &EnemyState, floor: u32) -> Intent {
                Intent::Block { amount: 5 + floor }
            }
        }

        let mut s =
            session(&["strike"; 5], vec![EnemyState::new("rat", 12, 4)]).with_policy(Turtle);
        s.end_turn().unwrap();

        assert_eq!(s.enemies()[0].intent, Intent::Block { amount: 6 });
        s.end_turn().unwrap();
        assert_eq!(s.enemies()[0].vitals.block, 6);
        assert_eq!(s.player().vitals.current_health, 66);
    }

    #[test]
    fn test_finish_returns_every_card() {
        let mut s = session(
            &["anger", "strike", "defend", "defend", "strike"],
            vec![EnemyState::new("slime", 35, 6)],
        );
        let idx = hand_index(&s, "anger");
        s.play_card(idx, 0).unwrap();
        assert_eq!(s.piles().exhaust_pile().len(), 1);

        let report = s.finish();

        assert_eq!(report.deck.len(), 5);
        assert_eq!(report.outcome, CombatStatus::Ongoing);
        assert_eq!(report.player.vitals.block, 0);
    }

    #[test]
    fn test_same_seed_same_fight() {
        let deck = ["strike", "defend", "flex", "cleave", "anger", "strike", "defend"];
        let mut a = session(&deck, vec![EnemyState::new("slime", 35, 6)]);
        let mut b = session(&deck, vec![EnemyState::new("slime", 35, 6)]);
        assert_eq!(a.snapshot(), b.snapshot());

        a.end_turn().unwrap();
        b.end_turn().unwrap();

        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_config_sets_energy_per_turn() {
        let config = CombatConfig::default().with_max_energy(5);
        let mut s = CombatSession::start(
            &cards(&["heavy_strike"; 6]),
            vec![EnemyState::new("boss_dragon", 100, 1)],
            PlayerState::default(),
            config,
            4,
        );

        assert_eq!(s.player().max_energy, 5);
        assert_eq!(s.player().energy, 5);

        s.play_card(0, 0).unwrap();
        s.play_card(0, 0).unwrap();
        assert_eq!(s.player().energy, 1);

        s.end_turn().unwrap();
        assert_eq!(s.player().energy, 5);
    }
}
