//! Immutable game tables: the starting hero and every tile-event payout.
//!
//! A [`GameConfig`] is built once (from defaults or a data file) and handed to
//! the engine by reference; nothing in it changes during play.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{MonsterCamp, Position, PrimarySkills, Resources, Tally};

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of log entries shown in the sidebar.
    pub log_window: usize,
    pub hero: HeroConfig,
    pub rewards: RewardTables,
}

impl GameConfig {
    pub const DEFAULT_LOG_WINDOW: usize = 10;

    pub fn new() -> Self {
        Self {
            log_window: Self::DEFAULT_LOG_WINDOW,
            hero: HeroConfig::default(),
            rewards: RewardTables::default(),
        }
    }

    /// Checks that the starting hero is well formed, every pool has something
    /// to hand out and every range is ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_window == 0 {
            return Err(ConfigError::ZeroLogWindow);
        }

        let primary = &self.hero.primary;
        for (skill, value) in [
            ("attack", primary.attack),
            ("defense", primary.defense),
            ("spell_power", primary.spell_power),
            ("knowledge", primary.knowledge),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroPrimarySkill { skill });
            }
        }

        for (table, tally) in [
            ("secondary_skills", &self.hero.secondary_skills),
            ("army", &self.hero.army),
        ] {
            if let Some((name, _)) = tally.iter().find(|(_, count)| *count == 0) {
                return Err(ConfigError::ZeroTallyEntry {
                    table,
                    name: name.to_owned(),
                });
            }
        }

        let rewards = &self.rewards;
        for (table, pool) in [
            ("treasure_artifacts", &rewards.treasure_artifacts),
            ("camp_artifacts", &rewards.camp_artifacts),
            ("library_spells", &rewards.library_spells),
            ("ruins_artifacts", &rewards.ruins_artifacts),
        ] {
            if pool.is_empty() {
                return Err(ConfigError::EmptyPool { table });
            }
        }

        for (table, range) in [
            ("treasure_gold", rewards.treasure_gold),
            ("resource_amount", rewards.resource_amount),
        ] {
            if range.min > range.max {
                return Err(ConfigError::InvertedRange {
                    table,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        if rewards.camp_drop_percent > 100 {
            return Err(ConfigError::ChanceOutOfRange {
                percent: rewards.camp_drop_percent,
            });
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Inclusive integer range for random payouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmountRange {
    pub min: u32,
    pub max: u32,
}

impl AmountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Starting kit of the hero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeroConfig {
    pub name: String,
    pub start: Position,
    pub experience: u64,
    pub primary: PrimarySkills,
    pub secondary_skills: Tally,
    pub spells: Vec<String>,
    pub artifacts: Vec<String>,
    pub resources: Resources,
    pub army: Tally,
    /// First entry of the adventure log.
    pub greeting: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            name: "Elrath".to_owned(),
            start: Position::new(8, 6),
            experience: 0,
            primary: PrimarySkills::uniform(1),
            secondary_skills: [("Scouting", 1)].into_iter().collect(),
            spells: vec!["Prayer".to_owned()],
            artifacts: vec!["Tome of Life".to_owned()],
            resources: Resources {
                gold: 2450,
                wood: 12,
                ore: 8,
                mercury: 3,
                sulfur: 2,
                crystal: 4,
                gems: 1,
            },
            army: [("Swordsman", 15), ("Archer", 8)].into_iter().collect(),
            greeting: "The hero is in position. Exploration begins!".to_owned(),
        }
    }
}

/// Payouts for every tile event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardTables {
    pub town_gold: u32,
    pub town_skill: String,
    pub treasure_artifacts: Vec<String>,
    pub treasure_gold: AmountRange,
    pub resource_amount: AmountRange,
    /// Stand-in used when a camp cell has no registry entry.
    pub default_camp: MonsterCamp,
    pub camp_artifacts: Vec<String>,
    pub camp_drop_percent: u32,
    pub library_spells: Vec<String>,
    pub arena_experience: u64,
    pub arena_skill_bonus: u32,
    pub ruins_artifacts: Vec<String>,
}

impl Default for RewardTables {
    fn default() -> Self {
        Self {
            town_gold: 800,
            town_skill: "Logistics".to_owned(),
            treasure_artifacts: owned(&[
                "Dragon Scale Armor",
                "Philosopher's Stone",
                "Angelic Alliance",
            ]),
            treasure_gold: AmountRange::new(500, 1500),
            resource_amount: AmountRange::new(1, 3),
            default_camp: MonsterCamp::new("Goblin", 10, 300),
            camp_artifacts: owned(&["Titan's Hammer", "Dragon Eye"]),
            camp_drop_percent: 30,
            library_spells: owned(&["Forgetfulness", "Fireball", "Cure", "Mana Well"]),
            arena_experience: 500,
            arena_skill_bonus: 1,
            ruins_artifacts: owned(&["Wellspring of Mana", "Hat of Ages"]),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// Reasons a configuration cannot drive a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("reward pool '{table}' is empty")]
    EmptyPool { table: &'static str },

    #[error("range '{table}' has min {min} above max {max}")]
    InvertedRange {
        table: &'static str,
        min: u32,
        max: u32,
    },

    #[error("drop chance {percent}% is above 100%")]
    ChanceOutOfRange { percent: u32 },

    #[error("log window must show at least one entry")]
    ZeroLogWindow,

    #[error("hero primary skill '{skill}' must be at least 1")]
    ZeroPrimarySkill { skill: &'static str },

    #[error("hero {table} entry '{name}' must be at least 1")]
    ZeroTallyEntry { table: &'static str, name: String },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyPool { .. } => "CONFIG_EMPTY_POOL",
            Self::InvertedRange { .. } => "CONFIG_INVERTED_RANGE",
            Self::ChanceOutOfRange { .. } => "CONFIG_CHANCE_OUT_OF_RANGE",
            Self::ZeroLogWindow => "CONFIG_ZERO_LOG_WINDOW",
            Self::ZeroPrimarySkill { .. } => "CONFIG_ZERO_PRIMARY_SKILL",
            Self::ZeroTallyEntry { .. } => "CONFIG_ZERO_TALLY_ENTRY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn empty_pool_is_rejected() {
        let mut config = GameConfig::default();
        config.rewards.library_spells.clear();
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyPool {
                table: "library_spells"
            })
        );
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut config = GameConfig::default();
        config.rewards.resource_amount = AmountRange::new(3, 1);
        let error = config.validate().unwrap_err();
        assert_eq!(error.error_code(), "CONFIG_INVERTED_RANGE");
    }

    #[test]
    fn drop_chance_is_a_percentage() {
        let mut config = GameConfig::default();
        config.rewards.camp_drop_percent = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn hero_skills_start_at_one() {
        let mut config = GameConfig::default();
        config.hero.primary.spell_power = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroPrimarySkill {
                skill: "spell_power"
            })
        );

        let mut config = GameConfig::default();
        config.hero.secondary_skills = [("Scouting", 0)].into_iter().collect();
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroTallyEntry {
                table: "secondary_skills",
                name: "Scouting".to_owned()
            })
        );
    }

    #[test]
    fn empty_army_stacks_are_rejected() {
        let mut config = GameConfig::default();
        config.hero.army = [("Swordsman", 15), ("Archer", 0)].into_iter().collect();
        let error = config.validate().unwrap_err();
        assert_eq!(error.error_code(), "CONFIG_ZERO_TALLY_ENTRY");
        assert_eq!(error.to_string(), "hero army entry 'Archer' must be at least 1");
    }

    #[test]
    fn log_window_shows_something() {
        let mut config = GameConfig::default();
        config.log_window = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroLogWindow));
    }
}
