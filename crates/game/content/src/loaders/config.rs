//! Game configuration loader.

use std::path::Path;

use heroes_core::GameConfig;

use crate::loaders::{LoadResult, parse_toml, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to the built-in defaults. The result is
    /// validated before it is returned.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "game config loaded");
        Ok(config)
    }

    /// Parse and validate config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = parse_toml(content, "config")?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid game config: {}", e))?;
        Ok(config)
    }
}
