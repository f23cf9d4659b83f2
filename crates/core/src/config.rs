//! Roster and session configuration.
//! This module exists to turn a TOML roster (or the built-in one) into validated encounters.
//! It does not own where configuration files live or how seeds are chosen.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::AiTier;
use crate::catalog::RitualPools;
use crate::context::{BattleContext, EnemyProfile, Participant};
use crate::screen::BattleScreen;
use crate::stack::ScreenStack;
use crate::stats::{StatValue, Stats};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read roster {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid roster: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("roster has no enemies")]
    EmptyRoster,
    #[error("{who}: {stat} must be positive, got {value}")]
    NonPositive { who: String, stat: &'static str, value: StatValue },
}

/// Maxima a participant starts the run with; current values start full.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    pub health: StatValue,
    pub shield: StatValue,
    pub mana: StatValue,
    pub power: StatValue,
}

impl StatsConfig {
    pub fn to_stats(self) -> Stats {
        Stats::full(self.health, self.shield, self.mana, self.power)
    }

    fn validate(&self, who: &str) -> Result<(), ConfigError> {
        let maxima = [("health", self.health), ("shield", self.shield), ("mana", self.mana)];
        for (stat, value) in maxima {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { who: who.to_string(), stat, value });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub name: String,
    #[serde(default)]
    pub portrait: String,
    pub tier: AiTier,
    pub stats: StatsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub player: StatsConfig,
    pub enemies: Vec<EnemyConfig>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        let demon = |name: &str, portrait: &str, tier, stats: [StatValue; 4]| EnemyConfig {
            name: name.to_string(),
            portrait: portrait.to_string(),
            tier,
            stats: StatsConfig {
                health: stats[0],
                shield: stats[1],
                mana: stats[2],
                power: stats[3],
            },
        };
        Self {
            player: StatsConfig { health: 100.0, shield: 50.0, mana: 100.0, power: 100.0 },
            enemies: vec![
                demon("Imp", "d0", AiTier::First, [50.0, 30.0, 100.0, 10.0]),
                demon("Fiend", "d1", AiTier::Second, [60.0, 35.0, 200.0, 20.0]),
                demon("Horror", "d2", AiTier::Third, [70.0, 50.0, 300.0, 30.0]),
                demon("Archdemon", "d3", AiTier::Fourth, [100.0, 60.0, 400.0, 40.0]),
            ],
        }
    }
}

impl RosterConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let roster: Self = toml::from_str(text)?;
        roster.validate()?;
        Ok(roster)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let roster = Self::from_toml_str(&text)?;
        log::info!("loaded roster of {} enemies from {}", roster.enemies.len(), path.display());
        Ok(roster)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enemies.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        self.player.validate("player")?;
        for enemy in &self.enemies {
            enemy.stats.validate(&enemy.name)?;
        }
        Ok(())
    }

    /// One context per enemy, in roster order, sharing the standard ritual pools.
    pub fn encounters(&self) -> Result<Vec<BattleContext>, ConfigError> {
        self.validate()?;
        let pools = Rc::new(RitualPools::standard());
        let player = Participant::new(self.player.to_stats());
        Ok(self
            .enemies
            .iter()
            .map(|enemy| {
                let profile = EnemyProfile {
                    name: enemy.name.clone(),
                    portrait: enemy.portrait.clone(),
                    tier: enemy.tier,
                };
                BattleContext::new(
                    player.clone(),
                    Participant::new(enemy.stats.to_stats()),
                    profile,
                    Rc::clone(&pools),
                )
            })
            .collect())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub seed: u64,
    pub roster: RosterConfig,
}

impl SessionConfig {
    pub fn new(seed: u64) -> Self {
        Self { seed, roster: RosterConfig::default() }
    }

    pub fn with_roster(mut self, roster: RosterConfig) -> Self {
        self.roster = roster;
        self
    }

    pub fn start(&self) -> Result<ScreenStack, ConfigError> {
        let encounters = self.roster.encounters()?;
        Ok(ScreenStack::new(BattleScreen::new(encounters, self.seed)))
    }
}
