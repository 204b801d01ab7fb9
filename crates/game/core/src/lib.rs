//! Adventure-map rules shared by every client.
//!
//! `heroes-core` defines the map model (terrain grid, features, monster-camp
//! registry), the hero's progression, and the engine that moves the hero and
//! resolves tile events. All state mutation flows through
//! [`engine::GameEngine`]; rendering and input live in client crates that read
//! the types re-exported here.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use config::{AmountRange, ConfigError, GameConfig, HeroConfig, RewardTables};
pub use engine::{GameEngine, MoveError, MoveOutcome, TileEvent};
pub use env::{
    CampPlacement, Env, FeatureKind, FeaturePlacement, GameEnv, MapDimensions, MapLayout, PcgRng,
    RngOracle, TerrainBlock, TerrainKind, Tile,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    CampRegistry, EventLog, GameState, Hero, HoverPreview, InitializationError, MonsterCamp,
    Position, PrimarySkills, ResourceKind, Resources, Tally, TileGrid, WorldState,
};
