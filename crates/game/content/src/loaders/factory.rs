//! Content factory for loading game data from a directory.

use std::path::{Path, PathBuf};

use heroes_core::{GameConfig, MapLayout};

use crate::loaders::{ConfigLoader, LoadResult, MapLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── maps/
///     └── classic.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data files shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::bundled_data_dir())
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file means "use the defaults"; a malformed one is an error.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a map from `maps/{map_name}.ron`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<MapLayout> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Names of every map in `maps/`, sorted.
    pub fn map_names(&self) -> LoadResult<Vec<String>> {
        let maps_dir = self.data_dir.join("maps");
        let entries = std::fs::read_dir(&maps_dir).map_err(|e| {
            anyhow::anyhow!("Failed to read map directory {}: {}", maps_dir.display(), e)
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "ron") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn missing_map_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = ContentFactory::new(dir.path())
            .load_map("nowhere")
            .unwrap_err();
        assert!(error.to_string().contains("nowhere.ron"));
    }

    #[test]
    fn lists_only_ron_maps() {
        let dir = tempfile::tempdir().unwrap();
        let maps = dir.path().join("maps");
        std::fs::create_dir(&maps).unwrap();
        for file in ["valley.ron", "arena.ron", "notes.txt"] {
            std::fs::write(maps.join(file), "(dimensions: (width: 1, height: 1))").unwrap();
        }

        let names = ContentFactory::new(dir.path()).map_names().unwrap();
        assert_eq!(names, ["arena", "valley"]);
    }
}
