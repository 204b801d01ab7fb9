//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Console client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Content directory; the bundled data is used when unset.
    pub data_dir: Option<PathBuf>,
    /// Map file name under `maps/`, without extension.
    pub map: String,
    /// Seed for tile-event rolls; derived from the clock when unset.
    pub seed: Option<u64>,
    /// Overrides the configured sidebar log window.
    pub log_window: Option<usize>,
    pub session_id: Option<String>,
    /// Pixel size of one map cell, used to resolve `click` coordinates.
    pub tile_size: u32,
}

impl ClientConfig {
    pub const DEFAULT_MAP: &'static str = "classic";
    pub const DEFAULT_TILE_SIZE: u32 = 32;

    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HEROES_DATA_DIR` - Content directory (default: bundled data)
    /// - `HEROES_MAP` - Map name (default: `classic`)
    /// - `HEROES_SEED` - Event seed (default: clock-derived)
    /// - `HEROES_LOG_WINDOW` - Log lines shown by `log` (default: from config)
    /// - `HEROES_SESSION_ID` - Log directory name (default: timestamped)
    /// - `HEROES_TILE_SIZE` - Cell size in pixels (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var_os("HEROES_DATA_DIR").map(PathBuf::from);

        if let Ok(map) = env::var("HEROES_MAP")
            && !map.trim().is_empty()
        {
            config.map = map.trim().to_owned();
        }

        config.seed = read_env::<u64>("HEROES_SEED");

        if let Some(window) = read_env::<usize>("HEROES_LOG_WINDOW") {
            config.log_window = Some(window.max(1));
        }

        config.session_id = env::var("HEROES_SESSION_ID").ok();

        if let Some(size) = read_env::<u32>("HEROES_TILE_SIZE") {
            config.tile_size = size.max(1);
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            map: Self::DEFAULT_MAP.to_owned(),
            seed: None,
            log_window: None,
            session_id: None,
            tile_size: Self::DEFAULT_TILE_SIZE,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
