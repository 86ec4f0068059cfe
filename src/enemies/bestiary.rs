//! Enemy templates and encounter generation.
//!
//! Each template carries base stats and the floor band it appears in.
//! Spawned enemies are scaled for their floor by `ScalingConfig`:
//!
//! ```
//! use spire_engine::enemies::Bestiary;
//!
//! let bestiary = Bestiary::standard();
//!
//! let goblin = bestiary.spawn("goblin", 3);
//! assert_eq!(goblin.vitals.max_health, 30); // 25 * 1.2
//! assert_eq!(goblin.base_damage, 8);        // floor(8 * 1.1)
//! ```
//!
//! ## Kinds
//!
//! Elite kinds are prefixed `elite_`, bosses `boss_`. Random encounters
//! draw from every kind whose floor band covers the floor, so a late
//! regular fight can roll an elite or the boss.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{CombatConfig, EnemyState, GameRng, ScalingConfig};

const ELITE_PREFIX: &str = "elite_";
const BOSS_PREFIX: &str = "boss_";
const FALLBACK_KIND: &str = "rat";

/// Base stats of one enemy kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub kind: String,
    pub health: u32,
    pub damage: u32,
    pub min_floor: u32,
    pub max_floor: u32,
}

impl EnemyTemplate {
    #[must_use]
    pub fn new(kind: impl Into<String>, health: u32, damage: u32, floors: (u32, u32)) -> Self {
        Self {
            kind: kind.into(),
            health,
            damage,
            min_floor: floors.0,
            max_floor: floors.1,
        }
    }

    #[must_use]
    pub fn is_elite(&self) -> bool {
        self.kind.starts_with(ELITE_PREFIX)
    }

    #[must_use]
    pub fn is_boss(&self) -> bool {
        self.kind.starts_with(BOSS_PREFIX)
    }

    #[must_use]
    pub const fn appears_on(&self, floor: u32) -> bool {
        floor >= self.min_floor && floor <= self.max_floor
    }
}

/// The set of enemy templates plus floor scaling and encounter size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bestiary {
    templates: Vec<EnemyTemplate>,
    scaling: ScalingConfig,
    /// Minimum and maximum enemies per `encounter`.
    encounter_size: (u32, u32),
}

impl Default for Bestiary {
    fn default() -> Self {
        Self::standard()
    }
}

impl Bestiary {
    /// Empty bestiary with the given scaling.
    #[must_use]
    pub fn new(scaling: ScalingConfig) -> Self {
        Self {
            templates: Vec::new(),
            scaling,
            encounter_size: CombatConfig::default().encounter_size,
        }
    }

    /// The shipped roster with scaling and encounter size from `config`.
    #[must_use]
    pub fn from_config(config: &CombatConfig) -> Self {
        let (min, max) = config.encounter_size;
        Self::standard()
            .with_scaling(config.scaling.clone())
            .with_encounter_size(min, max)
    }

    /// The shipped enemy roster.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(ScalingConfig::default())
            .with_template(EnemyTemplate::new("rat", 12, 4, (1, 3)))
            .with_template(EnemyTemplate::new("spider", 15, 5, (1, 4)))
            .with_template(EnemyTemplate::new("bat", 18, 6, (1, 5)))
            .with_template(EnemyTemplate::new("goblin", 25, 8, (2, 6)))
            .with_template(EnemyTemplate::new("slime", 35, 6, (2, 6)))
            .with_template(EnemyTemplate::new("skeleton", 40, 10, (3, 7)))
            .with_template(EnemyTemplate::new("elite_goblin", 50, 12, (3, 8)))
            .with_template(EnemyTemplate::new("elite_slime", 60, 8, (4, 8)))
            .with_template(EnemyTemplate::new("boss_dragon", 100, 15, (5, 9)))
    }

    /// Add or replace a template (builder pattern).
    #[must_use]
    pub fn with_template(mut self, template: EnemyTemplate) -> Self {
        self.templates.retain(|t| t.kind != template.kind);
        self.templates.push(template);
        self
    }

    /// Use different floor scaling.
    #[must_use]
    pub fn with_scaling(mut self, scaling: ScalingConfig) -> Self {
        self.scaling = scaling;
        self
    }

    /// Set encounter size bounds. `min` is raised to at least 1.
    #[must_use]
    pub fn with_encounter_size(mut self, min: u32, max: u32) -> Self {
        let min = min.max(1);
        self.encounter_size = (min, max.max(min));
        self
    }

    #[must_use]
    pub const fn scaling(&self) -> &ScalingConfig {
        &self.scaling
    }

    #[must_use]
    pub fn template(&self, kind: &str) -> Option<&EnemyTemplate> {
        self.templates.iter().find(|t| t.kind == kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.kind.as_str())
    }

    /// Spawn an enemy of `kind`, scaled for `floor`.
    ///
    /// Unknown kinds fall back to a rat. The enemy starts out intending to
    /// attack for its scaled damage.
    #[must_use]
    pub fn spawn(&self, kind: &str, floor: u32) -> EnemyState {
        let template = match self.template(kind) {
            Some(template) => template,
            None => {
                warn!(kind, "unknown enemy kind, spawning {}", FALLBACK_KIND);
                match self.template(FALLBACK_KIND) {
                    Some(template) => template,
                    None => return EnemyState::new(FALLBACK_KIND, 12, 4),
                }
            }
        };
        self.scaled(template, floor)
    }

    /// Random enemy of any kind whose floor band covers `floor`.
    ///
    /// Falls back to a rat when no kind covers the floor.
    pub fn spawn_random(&self, floor: u32, rng: &mut GameRng) -> EnemyState {
        let eligible: Vec<_> = self
            .templates
            .iter()
            .filter(|t| t.appears_on(floor))
            .collect();

        match rng.choose(&eligible) {
            Some(template) => self.scaled(template, floor),
            None => {
                debug!(floor, "no enemy for floor, spawning {}", FALLBACK_KIND);
                self.spawn(FALLBACK_KIND, floor)
            }
        }
    }

    /// Random elite, or a regular enemy if the roster has no elites.
    pub fn spawn_elite(&self, floor: u32, rng: &mut GameRng) -> EnemyState {
        let elites: Vec<_> = self.templates.iter().filter(|t| t.is_elite()).collect();
        match rng.choose(&elites) {
            Some(template) => self.scaled(template, floor),
            None => self.spawn_random(floor, rng),
        }
    }

    /// Random boss, or an elite if the roster has no bosses.
    pub fn spawn_boss(&self, floor: u32, rng: &mut GameRng) -> EnemyState {
        let bosses: Vec<_> = self.templates.iter().filter(|t| t.is_boss()).collect();
        match rng.choose(&bosses) {
            Some(template) => self.scaled(template, floor),
            None => self.spawn_elite(floor, rng),
        }
    }

    /// A regular encounter of random enemies, sized within the configured
    /// bounds.
    pub fn encounter(&self, floor: u32, rng: &mut GameRng) -> Vec<EnemyState> {
        let (min, max) = self.encounter_size;
        let count = rng.range_inclusive(min..=max);
        (0..count).map(|_| self.spawn_random(floor, rng)).collect()
    }

    fn scaled(&self, template: &EnemyTemplate, floor: u32) -> EnemyState {
        EnemyState::new(
            template.kind.clone(),
            self.scaling.health(template.health, floor),
            self.scaling.damage(template.damage, floor),
        )
    }
}
