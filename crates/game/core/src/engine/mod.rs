//! Hero movement and tile-event pipeline.
//!
//! The [`GameEngine`] is the only writer of [`GameState`]. A move runs
//! through three phases: `pre_validate` (bounds, passability), `apply`
//! (reposition and fire the tile event), `post_validate` (map/registry
//! consistency). Each move completes all of its mutations and log entries
//! before returning, so the next call always sees a settled state.

mod errors;
mod events;

pub use errors::MoveError;
pub use events::TileEvent;

use crate::env::{FeatureKind, GameEnv};
use crate::state::{GameState, Position};

use events::Rolls;

/// Result of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    pub destination: Position,
    pub event: TileEvent,
    /// New level, if the event pushed the hero over a threshold.
    pub level_up: Option<u32>,
}

/// Game engine that validates moves and resolves tile events.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    env: GameEnv<'a>,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given state.
    pub fn new(state: &'a mut GameState, env: GameEnv<'a>) -> Self {
        Self { state, env }
    }

    /// Moves the hero by a delta (one step for keyboard input).
    pub fn attempt_move(&mut self, dx: i32, dy: i32) -> Result<MoveOutcome, MoveError> {
        let destination = self.state.hero.position().offset(dx, dy);
        self.attempt_move_to(destination)
    }

    /// Moves the hero straight to a cell (pointer input).
    ///
    /// A rejected move appends one log entry, leaves the hero in place and
    /// returns the reason. An accepted move logs the arrival and fires the
    /// destination's tile event exactly once.
    pub fn attempt_move_to(&mut self, destination: Position) -> Result<MoveOutcome, MoveError> {
        if let Err(error) = self.pre_validate(destination) {
            tracing::debug!(%error, "move rejected");
            self.state.hero.log.push(error.narration());
            return Err(error);
        }

        let outcome = self.apply(destination);
        self.post_validate(destination);

        Ok(outcome)
    }

    fn pre_validate(&self, destination: Position) -> Result<(), MoveError> {
        match self.state.world.tile(destination) {
            None => Err(MoveError::OutOfBounds { destination }),
            Some(tile) if !tile.is_passable() => Err(MoveError::Impassable { destination, tile }),
            Some(_) => Ok(()),
        }
    }

    fn apply(&mut self, destination: Position) -> MoveOutcome {
        let level_before = self.state.hero.level();

        let hero = &mut self.state.hero;
        hero.position = destination;
        hero.log.push(format!("Moved to {destination}"));

        let mut rolls = Rolls::new(self.env.rng(), self.state.game_seed, self.state.nonce);
        let event = events::dispatch(self.state, &self.env, destination, &mut rolls);
        self.state.nonce += 1;

        let level_after = self.state.hero.level();
        tracing::debug!(%destination, nonce = self.state.nonce, ?event, "move resolved");

        MoveOutcome {
            destination,
            event,
            level_up: (level_after > level_before).then_some(level_after),
        }
    }

    /// A defeated camp must be gone from both the grid and the registry.
    fn post_validate(&self, destination: Position) {
        let world = &self.state.world;
        let is_camp_cell = world.tile(destination) == Some(FeatureKind::MonsterCamp.into());
        let has_entry = world.camps.contains(destination);
        if is_camp_cell || has_entry {
            tracing::error!(%destination, is_camp_cell, has_entry, "camp left behind after resolution");
        }
        debug_assert!(
            !is_camp_cell && !has_entry,
            "camp at {destination} survived its event"
        );
    }
}
