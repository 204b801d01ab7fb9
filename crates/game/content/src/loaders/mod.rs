//! Content loaders for reading game data from files.
//!
//! Map layouts are RON, configuration is TOML. Both deserialize straight into
//! `heroes-core` types through their optional serde derives.

pub mod config;
pub mod factory;
pub mod map;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use map::MapLoader;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

pub(crate) fn parse_ron<T: DeserializeOwned>(content: &str, what: &str) -> LoadResult<T> {
    ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse {} RON: {}", what, e))
}

pub(crate) fn parse_toml<T: DeserializeOwned>(content: &str, what: &str) -> LoadResult<T> {
    toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse {} TOML: {}", what, e))
}
