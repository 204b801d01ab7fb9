//! Data-driven content for the adventure map.
//!
//! This crate ships the bundled data files and the loaders that read them:
//! - Game configuration (hero kit, reward tables) from TOML
//! - Map layouts (terrain blocks, features, monster camps) from RON
//!
//! Loaders produce `heroes-core` types directly; content never appears in
//! game state except through [`heroes_core::GameState::new`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, MapLoader};

use std::path::{Path, PathBuf};

/// Directory of the data files bundled with this crate.
pub fn bundled_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
