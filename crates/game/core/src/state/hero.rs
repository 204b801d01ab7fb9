//! Hero progression: stats, treasury, army and the adventure log.

use strum::{Display, EnumCount, EnumIter};

use crate::config::HeroConfig;
use crate::state::{EventLog, Position, Tally};

/// Experience needed per level.
pub const EXPERIENCE_PER_LEVEL: u64 = 1000;

/// The seven kingdom resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    Gold,
    Wood,
    Ore,
    Mercury,
    Sulfur,
    Crystal,
    Gems,
}

impl ResourceKind {
    /// Kinds found in resource piles; gold only comes from towns, chests and bounties.
    pub const GATHERABLE: [ResourceKind; 6] = [
        ResourceKind::Wood,
        ResourceKind::Ore,
        ResourceKind::Mercury,
        ResourceKind::Sulfur,
        ResourceKind::Crystal,
        ResourceKind::Gems,
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resources {
    pub gold: u32,
    pub wood: u32,
    pub ore: u32,
    pub mercury: u32,
    pub sulfur: u32,
    pub crystal: u32,
    pub gems: u32,
}

impl Resources {
    pub const fn get(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Gold => self.gold,
            ResourceKind::Wood => self.wood,
            ResourceKind::Ore => self.ore,
            ResourceKind::Mercury => self.mercury,
            ResourceKind::Sulfur => self.sulfur,
            ResourceKind::Crystal => self.crystal,
            ResourceKind::Gems => self.gems,
        }
    }

    fn get_mut(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Gold => &mut self.gold,
            ResourceKind::Wood => &mut self.wood,
            ResourceKind::Ore => &mut self.ore,
            ResourceKind::Mercury => &mut self.mercury,
            ResourceKind::Sulfur => &mut self.sulfur,
            ResourceKind::Crystal => &mut self.crystal,
            ResourceKind::Gems => &mut self.gems,
        }
    }

    /// Adds to a stockpile, saturating at `u32::MAX`. Returns the new amount.
    pub fn add(&mut self, kind: ResourceKind, amount: u32) -> u32 {
        let slot = self.get_mut(kind);
        *slot = slot.saturating_add(amount);
        *slot
    }
}

/// Attack, defense, spell power and knowledge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimarySkills {
    pub attack: u32,
    pub defense: u32,
    pub spell_power: u32,
    pub knowledge: u32,
}

impl PrimarySkills {
    pub const fn uniform(value: u32) -> Self {
        Self {
            attack: value,
            defense: value,
            spell_power: value,
            knowledge: value,
        }
    }

    pub fn raise_all(&mut self, amount: u32) {
        for skill in [
            &mut self.attack,
            &mut self.defense,
            &mut self.spell_power,
            &mut self.knowledge,
        ] {
            *skill = skill.saturating_add(amount);
        }
    }
}

impl Default for PrimarySkills {
    fn default() -> Self {
        Self::uniform(1)
    }
}

/// The player's hero.
///
/// Created once from [`HeroConfig`]; afterwards it changes only through the
/// engine's move and event operations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    pub(crate) name: String,
    pub(crate) position: Position,
    pub(crate) level: u32,
    pub(crate) experience: u64,
    pub(crate) primary: PrimarySkills,
    pub(crate) secondary: Tally,
    pub(crate) spells: Vec<String>,
    pub(crate) artifacts: Vec<String>,
    pub(crate) resources: Resources,
    pub(crate) army: Tally,
    pub(crate) log: EventLog,
}

impl Hero {
    pub fn from_config(config: &HeroConfig) -> Self {
        let mut log = EventLog::new();
        log.push(config.greeting.as_str());

        Self {
            name: config.name.clone(),
            position: config.start,
            level: level_for(config.experience),
            experience: config.experience,
            primary: config.primary,
            secondary: config.secondary_skills.clone(),
            spells: config.spells.clone(),
            artifacts: config.artifacts.clone(),
            resources: config.resources,
            army: config.army.clone(),
            log,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    pub fn primary_skills(&self) -> &PrimarySkills {
        &self.primary
    }

    pub fn secondary_skills(&self) -> &Tally {
        &self.secondary
    }

    pub fn spells(&self) -> &[String] {
        &self.spells
    }

    pub fn artifacts(&self) -> &[String] {
        &self.artifacts
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn army(&self) -> &Tally {
        &self.army
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Adds experience and recomputes the level.
    ///
    /// Logs a level-up line when the level rises. Returns the new level if it changed.
    pub fn gain_experience(&mut self, amount: u64) -> Option<u32> {
        let previous = self.level;
        self.experience = self.experience.saturating_add(amount);
        self.level = level_for(self.experience).max(previous);

        if self.level > previous {
            tracing::debug!(level = self.level, experience = self.experience, "level up");
            self.log.push(format!("*** Level {}! ***", self.level));
            Some(self.level)
        } else {
            None
        }
    }

    /// Grants a secondary skill, or one more rank of a known one.
    ///
    /// Returns the new rank.
    pub fn add_skill(&mut self, name: &str) -> u32 {
        let rank = self.secondary.add(name, 1);
        self.log.push(format!("Learned the {name} skill!"));
        rank
    }

    /// Fixed, ordered sidebar lines.
    pub fn stats_lines(&self) -> Vec<String> {
        let r = &self.resources;
        let p = &self.primary;
        let artifacts: Vec<&str> = self.artifacts.iter().take(3).map(String::as_str).collect();

        vec![
            format!("Hero: {}", self.name),
            format!("Level: {} (Exp: {})", self.level, self.experience),
            format!("Gold: {}", r.gold),
            format!("Wood: {}, Ore: {}", r.wood, r.ore),
            format!("Mercury: {}, Sulfur: {}", r.mercury, r.sulfur),
            format!("Crystal: {}, Gems: {}", r.crystal, r.gems),
            format!(
                "Att/Def/Pow/Know: {}/{}/{}/{}",
                p.attack, p.defense, p.spell_power, p.knowledge
            ),
            format!("Skills: {}", self.secondary),
            format!("Spells: {}", self.spells.join(", ")),
            format!("Artifacts: {}", artifacts.join(", ")),
            format!("Army: {}", self.army),
        ]
    }
}

fn level_for(experience: u64) -> u32 {
    u32::try_from(1 + experience / EXPERIENCE_PER_LEVEL).unwrap_or(u32::MAX)
}
