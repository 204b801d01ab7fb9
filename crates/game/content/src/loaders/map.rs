//! Map layout loader.
//!
//! A map file is a serialized [`MapLayout`]: dimensions, an optional base
//! terrain, then terrain blocks, features and camps painted in that order.
//!
//! ```ron
//! (
//!     dimensions: (width: 18, height: 14),
//!     blocks: [(terrain: Water, min: (x: 14, y: 2), max: (x: 16, y: 4))],
//!     features: [(feature: Town, position: (x: 1, y: 1))],
//!     camps: [(position: (x: 5, y: 4), camp: (creature: "Goblin", count: 15, reward_gold: 300))],
//! )
//! ```

use std::path::Path;

use heroes_core::MapLayout;

use crate::loaders::{LoadResult, parse_ron, read_file};

/// Largest grid a map file may describe.
pub const MAX_MAP_CELLS: u64 = 1 << 20;

/// Loader for map layouts from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map layout from a RON file.
    ///
    /// Rejects layouts with a zero-sized map, a side that does not fit tile
    /// coordinates, or more than [`MAX_MAP_CELLS`] cells. Placements outside the map are
    /// accepted here and skipped (with a warning) when the map is generated.
    pub fn load(path: &Path) -> LoadResult<MapLayout> {
        let content = read_file(path)?;
        let layout = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            blocks = layout.blocks.len(),
            features = layout.features.len(),
            camps = layout.camps.len(),
            "map layout loaded"
        );
        Ok(layout)
    }

    /// Parse a map layout from RON text.
    pub fn parse(content: &str) -> LoadResult<MapLayout> {
        let layout: MapLayout = parse_ron(content, "map")?;
        let (width, height) = (layout.dimensions.width, layout.dimensions.height);
        if width == 0 || height == 0 {
            anyhow::bail!("Map dimensions {}x{} leave no cells", width, height);
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            anyhow::bail!(
                "Map dimensions {}x{} exceed the coordinate range",
                width,
                height
            );
        }
        let cells = u64::from(width) * u64::from(height);
        if cells > MAX_MAP_CELLS {
            anyhow::bail!(
                "Map dimensions {}x{} describe {} cells, more than the {} allowed",
                width,
                height,
                cells,
                MAX_MAP_CELLS
            );
        }
        Ok(layout)
    }
}
