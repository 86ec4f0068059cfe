//! Combat flow tests.
//!
//! These tests drive whole fights through the public API:
//! - Card play legality (energy, targets, terminal states)
//! - Block absorption and the enemy phase
//! - Turn reset and victory/defeat detection
//! - Snapshots and the event log

use spire_engine::cards::{CardCatalog, CardId, CardInstance};
use spire_engine::combat::{CombatEvent, CombatSession, CombatSnapshot, CombatStatus};
use spire_engine::core::{
    CombatConfig, EnemyState, GameRng, Intent, PlayError, PlayerConfig, PlayerState,
};
use spire_engine::enemies::{Bestiary, IntentPolicy};
use spire_engine::rewards::RewardTable;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn cards(ids: &[&str]) -> Vec<CardInstance> {
    let catalog = CardCatalog::standard();
    ids.iter()
        .map(|id| catalog.instantiate(&CardId::new(*id)).expect("card should exist"))
        .collect()
}

fn start(deck: &[&str], enemies: Vec<EnemyState>) -> CombatSession {
    init_tracing();
    CombatSession::start(
        &cards(deck),
        enemies,
        PlayerState::default(),
        CombatConfig::default(),
        42,
    )
}

fn find(session: &CombatSession, id: &str) -> usize {
    session
        .piles()
        .hand()
        .iter()
        .position(|c| c.id.as_str() == id)
        .expect("card should be in hand")
}

/// Strike spends one energy and deals six damage.
#[test]
fn test_strike_basic_play() {
    let mut session = start(&["strike"; 5], vec![EnemyState::new("goblin", 25, 8)]);

    let outcome = session.play_card(0, 0).unwrap();

    assert_eq!(outcome.energy_spent, 1);
    assert_eq!(outcome.total_damage(), 6);
    assert_eq!(session.player().energy, 2);
    assert_eq!(session.enemies()[0].vitals.current_health, 19);
    assert_eq!(session.piles().hand().len(), 4);
    assert_eq!(session.piles().discard_pile().len(), 1);
}

/// Enemy block absorbs before health.
#[test]
fn test_block_absorbs_before_health() {
    struct Guard;
    impl IntentPolicy for Guard {
        fn next_intent(&self, _enemy: &EnemyState, _floor: u32) -> Intent {
            Intent::Block { amount: 5 }
        }
    }

    let mut session =
        start(&["heavy_strike"; 5], vec![EnemyState::new("slime", 35, 6)]).with_policy(Guard);
    session.end_turn().unwrap(); // attacks, declares block
    session.end_turn().unwrap(); // gains 5 block
    assert_eq!(session.enemies()[0].vitals.block, 5);

    let outcome = session.play_card(0, 0).unwrap();

    assert_eq!(outcome.hits[0].outcome.blocked, 5);
    assert_eq!(outcome.hits[0].outcome.to_health, 7);
    assert_eq!(session.enemies()[0].vitals.block, 0);
    assert_eq!(session.enemies()[0].vitals.current_health, 28);
}

/// Player block absorbs an enemy attack and expires at turn start.
#[test]
fn test_player_block_then_reset() {
    let mut session = start(&["defend"; 10], vec![EnemyState::new("goblin", 25, 8)]);

    session.play_card(0, 0).unwrap();
    assert_eq!(session.player().vitals.block, 5);

    let report = session.end_turn().unwrap();
    let hit = report.enemy_actions[0].damage.unwrap();

    assert_eq!(hit.blocked, 5);
    assert_eq!(hit.to_health, 3);
    assert_eq!(session.player().vitals.current_health, 67);
    assert_eq!(session.player().vitals.block, 0);
}

/// Energy gates every fixed-cost play.
#[test]
fn test_energy_gating() {
    let mut session = start(&["heavy_strike"; 5], vec![EnemyState::new("boss_dragon", 100, 15)]);

    session.play_card(0, 0).unwrap();
    let err = session.play_card(0, 0).unwrap_err();

    assert_eq!(
        err,
        PlayError::InsufficientEnergy {
            required: 2,
            available: 1
        }
    );
    assert_eq!(session.piles().hand().len(), 4);
    assert_eq!(session.player().energy, 1);
}

/// Zero-cost cards are playable with no energy left.
#[test]
fn test_zero_cost_with_no_energy() {
    let mut session = start(
        &["heavy_strike", "strike", "quick_strike", "defend", "defend"],
        vec![EnemyState::new("boss_dragon", 100, 15)],
    );
    session.play_card(find(&session, "heavy_strike"), 0).unwrap();
    session.play_card(find(&session, "strike"), 0).unwrap();
    assert_eq!(session.player().energy, 0);

    let outcome = session.play_card(find(&session, "quick_strike"), 0).unwrap();
    assert_eq!(outcome.energy_spent, 0);
    assert_eq!(outcome.total_damage(), 3);
}

/// Attacks need a living target; skills don't care.
#[test]
fn test_targeting_legality() {
    let mut session = start(
        &["heavy_strike", "strike", "defend", "strike", "strike"],
        vec![EnemyState::new("rat", 12, 4), EnemyState::new("bat", 18, 6)],
    );

    session.play_card(find(&session, "heavy_strike"), 0).unwrap();
    assert!(!session.enemies()[0].is_alive());

    let strike = find(&session, "strike");
    assert_eq!(
        session.play_card(strike, 0).unwrap_err(),
        PlayError::InvalidTarget { index: 0 }
    );
    assert_eq!(
        session.play_card(strike, 7).unwrap_err(),
        PlayError::InvalidTarget { index: 7 }
    );
    assert!(session.check_play(strike, 1).is_ok());

    let defend = find(&session, "defend");
    assert!(session.play_card(defend, 0).is_ok());
}

/// Cleave needs a living target, then hits every living enemy.
#[test]
fn test_aoe_hits_all_living() {
    let mut session = start(
        &["cleave"; 5],
        vec![
            EnemyState::new("rat", 12, 4),
            EnemyState::new("spider", 15, 5),
            EnemyState::new("bat", 18, 6),
        ],
    );

    assert_eq!(
        session.play_card(0, 99).unwrap_err(),
        PlayError::InvalidTarget { index: 99 }
    );

    let outcome = session.play_card(0, 2).unwrap();

    assert_eq!(outcome.hits.len(), 3);
    let health: Vec<_> = session
        .enemies()
        .iter()
        .map(|e| e.vitals.current_health)
        .collect();
    assert_eq!(health, vec![4, 7, 10]);
}

/// Killing every enemy ends the combat as a victory.
#[test]
fn test_victory() {
    let mut session = start(
        &["cleave"; 5],
        vec![EnemyState::new("rat", 8, 4), EnemyState::new("rat", 8, 4)],
    );

    let outcome = session.play_card(0, 0).unwrap();

    assert_eq!(outcome.kills(), 2);
    assert_eq!(outcome.status, CombatStatus::Victory);
    assert!(session.is_victory());
    assert_eq!(
        session.end_turn().unwrap_err(),
        PlayError::CombatOver {
            status: CombatStatus::Victory
        }
    );
}

/// Turn reset restores energy, drops block and deals five.
#[test]
fn test_turn_reset() {
    let mut session = start(&["defend"; 12], vec![EnemyState::new("rat", 12, 1)]);
    session.play_card(0, 0).unwrap();
    session.play_card(0, 0).unwrap();
    session.play_card(0, 0).unwrap();

    let report = session.end_turn().unwrap();

    assert_eq!(report.turn, 1);
    assert_eq!(report.discarded, 2);
    assert_eq!(session.piles().discard_pile().len(), 5);
    assert_eq!(report.draw.drawn, 5);
    assert_eq!(session.turn(), 1);
    assert_eq!(session.player().energy, session.player().max_energy);
    assert_eq!(session.player().vitals.block, 0);
    assert_eq!(session.piles().hand().len(), 5);
}

/// Flex's strength boosts attacks this turn, then wears off.
#[test]
fn test_flex_strength_expires_at_end_of_turn() {
    let mut session = start(
        &["flex", "strike", "strike", "defend", "defend"],
        vec![EnemyState::new("boss_dragon", 100, 1)],
    );

    session.play_card(find(&session, "flex"), 0).unwrap();
    assert_eq!(session.player().strength, 2);

    let outcome = session.play_card(find(&session, "strike"), 0).unwrap();
    assert_eq!(outcome.total_damage(), 8);

    session.end_turn().unwrap();

    assert_eq!(session.player().strength, 0);
    assert_eq!(session.player().temporary_strength, 0);
    assert!(session
        .events()
        .iter()
        .any(|e| *e == CombatEvent::StrengthExpired { amount: 2 }));
}

/// A lethal enemy phase is a defeat; later enemies don't act.
#[test]
fn test_defeat_stops_enemy_phase() {
    let mut player = PlayerState::default();
    player.vitals.current_health = 5;
    let mut session = CombatSession::start(
        &cards(&["strike"; 5]),
        vec![EnemyState::new("goblin", 25, 8), EnemyState::new("bat", 18, 6)],
        player,
        CombatConfig::default(),
        1,
    );

    let report = session.end_turn().unwrap();

    assert_eq!(report.status, CombatStatus::Defeat);
    assert_eq!(report.enemy_actions.len(), 1);
    assert_eq!(session.player().vitals.current_health, 0);
    assert!(session.play_card(0, 0).is_err());
}

/// The snapshot survives a JSON round trip for the UI.
#[test]
fn test_snapshot_serialization() {
    let mut session = start(
        &["strike", "defend", "anger", "cleave", "flex", "strike"],
        vec![EnemyState::new("goblin", 25, 8)],
    );
    session.play_card(0, 0).unwrap();

    let snapshot = session.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: CombatSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, snapshot);
    assert_eq!(snapshot.card_count(), 6);
    assert_eq!(snapshot.living_enemies().count(), 1);
}

/// Snapshot marks what the player can afford.
#[test]
fn test_snapshot_affordability() {
    let mut session = start(&["heavy_strike"; 5], vec![EnemyState::new("boss_dragon", 100, 15)]);
    session.play_card(0, 0).unwrap();

    let snapshot = session.snapshot();

    assert!(snapshot.hand.iter().all(|c| !c.affordable));
}

/// The event log records a play in resolution order.
#[test]
fn test_event_log_order() {
    let mut session = start(&["iron_wave"; 5], vec![EnemyState::new("goblin", 25, 8)]);
    session.drain_events();

    session.play_card(0, 0).unwrap();
    let events: Vec<_> = session.drain_events().into_iter().collect();

    assert_eq!(
        events,
        vec![
            CombatEvent::CardPlayed {
                card: CardId::new("iron_wave"),
                energy_spent: 1
            },
            CombatEvent::DamageDealt {
                target: 0,
                amount: 5,
                blocked: 0
            },
            CombatEvent::BlockGained { amount: 5 },
        ]
    );
    assert!(session.events().is_empty());
}

/// A full fight against a bestiary encounter ends and returns every card.
#[test]
fn test_full_fight_against_encounter() {
    init_tracing();
    let config = CombatConfig::default().with_encounter_size(1, 2);
    let catalog = CardCatalog::standard();
    let bestiary = Bestiary::from_config(&config);
    let mut rng = GameRng::new(2024);
    let enemies = bestiary.encounter(1, &mut rng);
    assert!((1..=2).contains(&enemies.len()));
    let deck = catalog.starter_deck().unwrap();
    let player = PlayerState::new(&config.player);

    let mut session = CombatSession::start(&deck, enemies, player, config.clone(), 2024);

    for _ in 0..50 {
        if session.status().is_over() {
            break;
        }
        // Attack the first living enemy with whatever is affordable
        loop {
            let target = match session.living_enemies().next() {
                Some(target) => target,
                None => break,
            };
            let playable = (0..session.piles().hand().len())
                .find(|&i| session.check_play(i, target).is_ok());
            match playable {
                Some(index) => {
                    session.play_card(index, target).unwrap();
                }
                None => break,
            }
            if session.status().is_over() {
                break;
            }
        }
        if !session.status().is_over() {
            session.end_turn().unwrap();
        }
    }

    assert!(session.status().is_over());
    let report = session.finish();
    assert_eq!(report.deck.len(), 10);
    assert_eq!(report.player.strength, 0);

    if report.outcome == CombatStatus::Victory {
        let rewards = RewardTable::from_config(&config).reward_cards(&catalog, &mut rng);
        assert!(!rewards.is_empty());
    }
}

/// Energy per turn follows the config, not the player record passed in.
#[test]
fn test_config_drives_energy() {
    init_tracing();
    let config = CombatConfig::default().with_player(PlayerConfig {
        max_energy: 5,
        max_health: 99,
        ..PlayerConfig::default()
    });

    let mut session = CombatSession::start(
        &cards(&["strike"; 8]),
        vec![EnemyState::new("boss_dragon", 100, 2)],
        PlayerState::default(),
        config.clone(),
        1,
    );
    assert_eq!(session.player().energy, 5);
    for _ in 0..5 {
        session.play_card(0, 0).unwrap();
    }
    assert_eq!(session.player().energy, 0);

    session.end_turn().unwrap();
    assert_eq!(session.player().energy, 5);

    // A new run takes every starting value from the config
    let fresh = PlayerState::new(&config.player);
    assert_eq!(fresh.vitals.max_health, 99);
    assert_eq!(fresh.max_energy, 5);
}
