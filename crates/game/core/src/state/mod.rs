//! Authoritative game state representation.
//!
//! This module owns the hero, the adventure map and the camp registry.
//! Clients read this state freely but mutate it exclusively through the
//! engine.
mod camps;
mod common;
mod grid;
mod hero;
mod log;
mod world;

pub use camps::{CampRegistry, MonsterCamp};
pub use common::{Position, Tally};
pub use grid::TileGrid;
pub use hero::{EXPERIENCE_PER_LEVEL, Hero, PrimarySkills, ResourceKind, Resources};
pub use log::EventLog;
pub use world::{HoverPreview, WorldState};

use crate::config::GameConfig;
use crate::env::{MapLayout, Tile};
use crate::error::{ErrorSeverity, GameError};

/// Errors raised while assembling the starting state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    #[error("hero start {position} is outside the map")]
    StartOutOfBounds { position: Position },

    #[error("hero start {position} is on impassable {tile:?}")]
    StartImpassable { position: Position, tile: Tile },
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::StartOutOfBounds { .. } => "INIT_START_OUT_OF_BOUNDS",
            Self::StartImpassable { .. } => "INIT_START_IMPASSABLE",
        }
    }
}

/// Canonical snapshot of a running game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Seed for tile-event rolls. Set once at game start.
    pub game_seed: u64,

    /// Number of accepted moves so far; combined with `game_seed` for each roll.
    pub nonce: u64,

    pub hero: Hero,
    pub world: WorldState,
}

impl GameState {
    /// Generates the map from `layout` and places the configured hero on it.
    pub fn new(
        config: &GameConfig,
        layout: &MapLayout,
        game_seed: u64,
    ) -> Result<Self, InitializationError> {
        let world = WorldState::generate(layout);
        let hero = Hero::from_config(&config.hero);
        let position = hero.position();

        match world.tile(position) {
            None => return Err(InitializationError::StartOutOfBounds { position }),
            Some(tile) if !tile.is_passable() => {
                return Err(InitializationError::StartImpassable { position, tile });
            }
            Some(_) => {}
        }

        Ok(Self {
            game_seed,
            nonce: 0,
            hero,
            world,
        })
    }

    /// The classic map with the default hero.
    pub fn classic(game_seed: u64) -> Self {
        Self {
            game_seed,
            nonce: 0,
            hero: Hero::from_config(&GameConfig::default().hero),
            world: WorldState::classic(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapDimensions, TerrainKind};

    #[test]
    fn rejects_start_off_the_map() {
        let layout = MapLayout::blank(MapDimensions::new(4, 4));
        let error = GameState::new(&GameConfig::default(), &layout, 0).unwrap_err();
        assert_eq!(
            error,
            InitializationError::StartOutOfBounds {
                position: Position::new(8, 6)
            }
        );
        assert_eq!(error.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn rejects_start_in_water() {
        let layout = MapLayout::classic().with_block(TerrainKind::Water, (8, 6), (8, 6));
        let error = GameState::new(&GameConfig::default(), &layout, 0).unwrap_err();
        assert_eq!(error.error_code(), "INIT_START_IMPASSABLE");
    }

    #[test]
    fn classic_matches_generated_default() {
        let built = GameState::new(&GameConfig::default(), &MapLayout::classic(), 9).unwrap();
        assert_eq!(built, GameState::classic(9));
    }
}
