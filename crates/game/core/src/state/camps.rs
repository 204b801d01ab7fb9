use std::collections::BTreeMap;

use crate::state::Position;

/// Creature stack guarding a monster camp and the bounty it pays out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterCamp {
    pub creature: String,
    pub count: u32,
    pub reward_gold: u32,
    /// Marks camps advertised as carrying loot. The drop roll itself applies to every camp.
    #[cfg_attr(feature = "serde", serde(default))]
    pub artifact_drop: bool,
}

impl MonsterCamp {
    pub fn new(creature: impl Into<String>, count: u32, reward_gold: u32) -> Self {
        Self {
            creature: creature.into(),
            count,
            reward_gold,
            artifact_drop: false,
        }
    }

    #[must_use]
    pub fn with_artifact_drop(mut self) -> Self {
        self.artifact_drop = true;
        self
    }

    /// Experience granted for defeating the camp.
    pub const fn experience(&self) -> u32 {
        self.reward_gold / 10
    }
}

/// Out-of-band camp data keyed by grid position.
///
/// Entries are only added during map generation and removed through
/// [`WorldState::take_camp`](crate::state::WorldState::take_camp), which also
/// clears the grid cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampRegistry {
    camps: BTreeMap<Position, MonsterCamp>,
}

impl CampRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, position: Position) -> Option<&MonsterCamp> {
        self.camps.get(&position)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.camps.contains_key(&position)
    }

    pub fn len(&self) -> usize {
        self.camps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.camps.is_empty()
    }

    /// Camps in position order, for drawing markers.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &MonsterCamp)> {
        self.camps.iter().map(|(position, camp)| (*position, camp))
    }

    pub(crate) fn insert(&mut self, position: Position, camp: MonsterCamp) -> Option<MonsterCamp> {
        self.camps.insert(position, camp)
    }

    pub(crate) fn remove(&mut self, position: Position) -> Option<MonsterCamp> {
        self.camps.remove(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_is_a_tenth_of_the_bounty() {
        assert_eq!(MonsterCamp::new("Goblin", 10, 300).experience(), 30);
        assert_eq!(MonsterCamp::new("Gold Golem", 1, 2005).experience(), 200);
    }

    #[test]
    fn registry_iterates_in_position_order() {
        let mut registry = CampRegistry::new();
        registry.insert(Position::new(15, 5), MonsterCamp::new("Cyclops", 5, 800));
        registry.insert(Position::new(5, 4), MonsterCamp::new("Goblin", 15, 300));

        let creatures: Vec<&str> = registry.iter().map(|(_, camp)| camp.creature.as_str()).collect();
        assert_eq!(creatures, ["Goblin", "Cyclops"]);
        assert!(registry.remove(Position::new(5, 4)).is_some());
        assert!(!registry.contains(Position::new(5, 4)));
    }
}
