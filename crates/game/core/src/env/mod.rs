//! Read-only world data.
//!
//! Map geometry types, placement blueprints and the RNG oracle. The [`Env`]
//! aggregate bundles the configuration tables and the RNG so the engine can
//! reach everything it needs without owning it.
mod layout;
mod map;
mod rng;

pub use layout::{CampPlacement, FeaturePlacement, MapLayout, TerrainBlock};
pub use map::{FeatureKind, MapDimensions, TerrainKind, Tile};
pub use rng::{PcgRng, RngOracle, choose, compute_seed};

use crate::config::GameConfig;

/// Aggregates the read-only inputs of the engine.
pub struct Env<'a, R>
where
    R: RngOracle + ?Sized,
{
    config: &'a GameConfig,
    rng: &'a R,
}

pub type GameEnv<'a> = Env<'a, dyn RngOracle + 'a>;

impl<'a, R> Env<'a, R>
where
    R: RngOracle + ?Sized,
{
    pub fn new(config: &'a GameConfig, rng: &'a R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a R {
        self.rng
    }
}

impl<'a, R> Env<'a, R>
where
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let rng: &'a dyn RngOracle = self.rng;
        Env::new(self.config, rng)
    }
}

impl<R> Clone for Env<'_, R>
where
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Env<'_, R> where R: RngOracle + ?Sized {}

impl<R> std::fmt::Debug for Env<'_, R>
where
    R: RngOracle + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
