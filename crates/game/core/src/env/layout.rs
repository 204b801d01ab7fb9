//! Placement blueprints for the adventure map.
//!
//! A [`MapLayout`] is pure data: rectangular terrain blocks painted in order,
//! single-cell features painted on top, and monster camps with their guards.
//! [`WorldState::generate`](crate::state::WorldState::generate) turns it into
//! a live grid and camp registry.

use crate::env::{FeatureKind, MapDimensions, TerrainKind};
use crate::state::{MonsterCamp, Position};

/// Inclusive rectangle of a single terrain type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainBlock {
    pub terrain: TerrainKind,
    pub min: Position,
    pub max: Position,
}

impl TerrainBlock {
    pub const fn new(terrain: TerrainKind, min: Position, max: Position) -> Self {
        Self { terrain, min, max }
    }

    /// Every position covered by the block, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| Position::new(x, y)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeaturePlacement {
    pub feature: FeatureKind,
    pub position: Position,
}

impl FeaturePlacement {
    pub const fn new(feature: FeatureKind, x: i32, y: i32) -> Self {
        Self {
            feature,
            position: Position::new(x, y),
        }
    }
}

/// A guarded camp. Generation paints the cell as a monster camp as well.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CampPlacement {
    pub position: Position,
    pub camp: MonsterCamp,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapLayout {
    pub dimensions: MapDimensions,
    /// Terrain that fills every cell before blocks are painted.
    #[cfg_attr(feature = "serde", serde(default = "default_base"))]
    pub base: TerrainKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocks: Vec<TerrainBlock>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: Vec<FeaturePlacement>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub camps: Vec<CampPlacement>,
}

#[cfg(feature = "serde")]
fn default_base() -> TerrainKind {
    TerrainKind::Plain
}

impl MapLayout {
    /// An empty map of the given size covered in plain terrain.
    pub fn blank(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            base: TerrainKind::Plain,
            blocks: Vec::new(),
            features: Vec::new(),
            camps: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_block(mut self, terrain: TerrainKind, min: (i32, i32), max: (i32, i32)) -> Self {
        self.blocks
            .push(TerrainBlock::new(terrain, min.into(), max.into()));
        self
    }

    #[must_use]
    pub fn with_feature(mut self, feature: FeatureKind, x: i32, y: i32) -> Self {
        self.features.push(FeaturePlacement::new(feature, x, y));
        self
    }

    #[must_use]
    pub fn with_camp(mut self, x: i32, y: i32, camp: MonsterCamp) -> Self {
        self.camps.push(CampPlacement {
            position: Position::new(x, y),
            camp,
        });
        self
    }

    /// The 18x14 starter map: a desert corner with the home town, a lake
    /// to the north-east, mountains, forest, snow fields and a swamp, plus
    /// the points of interest scattered between them.
    pub fn classic() -> Self {
        use TerrainKind::*;

        Self::blank(MapDimensions::new(18, 14))
            .with_block(Water, (14, 2), (16, 4))
            .with_block(Mountain, (3, 10), (5, 11))
            .with_block(Mountain, (12, 5), (12, 7))
            .with_block(Forest, (10, 9), (12, 11))
            .with_block(Desert, (0, 0), (3, 3))
            .with_block(Snow, (14, 10), (17, 13))
            .with_block(Swamp, (5, 2), (7, 4))
            .with_feature(FeatureKind::Town, 1, 1)
            .with_feature(FeatureKind::Treasure, 13, 1)
            .with_feature(FeatureKind::Resource, 7, 2)
            .with_feature(FeatureKind::MonsterCamp, 5, 4)
            .with_feature(FeatureKind::Library, 10, 6)
            .with_feature(FeatureKind::Arena, 1, 12)
            .with_feature(FeatureKind::Port, 15, 0)
            .with_feature(FeatureKind::Ruins, 15, 11)
            .with_feature(FeatureKind::Resource, 3, 8)
            .with_feature(FeatureKind::MonsterCamp, 15, 5)
            .with_camp(5, 4, MonsterCamp::new("Goblin", 15, 300))
            .with_camp(15, 5, MonsterCamp::new("Cyclops", 5, 800).with_artifact_drop())
            .with_camp(10, 1, MonsterCamp::new("Gold Golem", 1, 2000).with_artifact_drop())
    }
}

impl Default for MapLayout {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_positions_are_inclusive() {
        let block = TerrainBlock::new(
            TerrainKind::Water,
            Position::new(14, 2),
            Position::new(16, 4),
        );
        let positions: Vec<Position> = block.positions().collect();
        assert_eq!(positions.len(), 9);
        assert_eq!(positions.first(), Some(&Position::new(14, 2)));
        assert_eq!(positions.last(), Some(&Position::new(16, 4)));
    }

    #[test]
    fn classic_layout_fits_its_map() {
        let layout = MapLayout::classic();
        let dims = layout.dimensions;
        for block in &layout.blocks {
            assert!(dims.contains(block.min) && dims.contains(block.max));
        }
        for placement in &layout.features {
            assert!(dims.contains(placement.position));
        }
        for placement in &layout.camps {
            assert!(dims.contains(placement.position));
        }
    }
}
