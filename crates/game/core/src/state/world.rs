use crate::env::{FeatureKind, MapDimensions, MapLayout, Tile};
use crate::state::{CampRegistry, MonsterCamp, Position, TileGrid};

/// Read-only highlight data for the cell under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoverPreview {
    pub position: Position,
    /// `None` when the pointer is off the map.
    pub tile: Option<Tile>,
    pub passable: bool,
}

/// The adventure map: terrain grid plus the camps guarding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldState {
    pub grid: TileGrid,
    pub camps: CampRegistry,
}

impl WorldState {
    /// Builds the grid and camp registry from a placement blueprint.
    ///
    /// Blocks are painted in order, then features, then camps (which also
    /// paint their cell). Placements that fall outside the map are skipped.
    pub fn generate(layout: &MapLayout) -> Self {
        let mut grid = TileGrid::filled(layout.dimensions, layout.base.into());

        for block in &layout.blocks {
            let skipped = block
                .positions()
                .filter(|position| !grid.set(*position, block.terrain.into()))
                .count();
            if skipped > 0 {
                tracing::warn!(terrain = %block.terrain, skipped, "terrain block leaves the map");
            }
        }

        for placement in &layout.features {
            if !grid.set(placement.position, placement.feature.into()) {
                tracing::warn!(position = %placement.position, feature = %placement.feature, "feature outside the map ignored");
            }
        }

        let mut camps = CampRegistry::new();
        for placement in &layout.camps {
            if !grid.set(placement.position, FeatureKind::MonsterCamp.into()) {
                tracing::warn!(position = %placement.position, creature = %placement.camp.creature, "camp outside the map ignored");
                continue;
            }
            camps.insert(placement.position, placement.camp.clone());
        }

        tracing::debug!(
            width = layout.dimensions.width,
            height = layout.dimensions.height,
            camps = camps.len(),
            "map generated"
        );

        Self { grid, camps }
    }

    /// The built-in starter map.
    pub fn classic() -> Self {
        Self::generate(&MapLayout::classic())
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.grid.dimensions()
    }

    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.grid.tile(position)
    }

    pub fn is_passable(&self, position: Position) -> bool {
        self.grid.is_passable(position)
    }

    /// Describes a hovered cell without touching any state.
    pub fn preview(&self, position: Position) -> HoverPreview {
        HoverPreview {
            position,
            tile: self.tile(position),
            passable: self.is_passable(position),
        }
    }

    /// Removes a defeated camp: drops its registry entry and reverts the cell
    /// in one step, so neither can outlive the other.
    ///
    /// Returns the removed entry, if the registry had one.
    pub fn take_camp(&mut self, position: Position) -> Option<MonsterCamp> {
        let camp = self.camps.remove(position);
        if self.grid.tile(position) == Some(FeatureKind::MonsterCamp.into()) {
            self.grid.clear_feature(position);
        }
        camp
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TerrainKind;

    #[test]
    fn classic_map_places_features_over_terrain() {
        let world = WorldState::classic();
        assert_eq!(world.dimensions(), MapDimensions::new(18, 14));

        let expect = [
            ((1, 1), Tile::from(FeatureKind::Town)),
            ((13, 1), FeatureKind::Treasure.into()),
            ((7, 2), FeatureKind::Resource.into()),
            ((3, 8), FeatureKind::Resource.into()),
            ((5, 4), FeatureKind::MonsterCamp.into()),
            ((15, 5), FeatureKind::MonsterCamp.into()),
            ((10, 1), FeatureKind::MonsterCamp.into()),
            ((10, 6), FeatureKind::Library.into()),
            ((1, 12), FeatureKind::Arena.into()),
            ((15, 0), FeatureKind::Port.into()),
            ((15, 11), FeatureKind::Ruins.into()),
            ((14, 2), TerrainKind::Water.into()),
            ((16, 4), TerrainKind::Water.into()),
            ((12, 6), TerrainKind::Mountain.into()),
            ((0, 0), TerrainKind::Desert.into()),
            ((17, 13), TerrainKind::Snow.into()),
            ((6, 3), TerrainKind::Swamp.into()),
            ((11, 10), TerrainKind::Forest.into()),
            ((8, 6), Tile::PLAIN),
        ];
        for ((x, y), tile) in expect {
            assert_eq!(world.tile(Position::new(x, y)), Some(tile), "at ({x}, {y})");
        }
    }

    #[test]
    fn every_camp_sits_on_a_camp_cell() {
        let world = WorldState::classic();
        assert_eq!(world.camps.len(), 3);
        for (position, _) in world.camps.iter() {
            assert_eq!(world.tile(position), Some(FeatureKind::MonsterCamp.into()));
        }
    }

    #[test]
    fn take_camp_clears_cell_and_entry_together() {
        let mut world = WorldState::classic();
        let lair = Position::new(15, 5);

        let camp = world.take_camp(lair).expect("cyclops camp");
        assert_eq!(camp.creature, "Cyclops");
        assert!(!world.camps.contains(lair));
        assert_eq!(world.tile(lair), Some(Tile::PLAIN));

        assert_eq!(world.take_camp(lair), None);
    }

    #[test]
    fn preview_reports_passability() {
        let world = WorldState::classic();
        let lake = world.preview(Position::new(15, 3));
        assert_eq!(lake.tile, Some(TerrainKind::Water.into()));
        assert!(!lake.passable);

        assert!(world.preview(Position::new(1, 1)).passable);
        let off_map = world.preview(Position::new(30, 1));
        assert_eq!(off_map.tile, None);
        assert!(!off_map.passable);
    }

    #[test]
    fn out_of_map_placements_are_skipped() {
        let layout = MapLayout::blank(MapDimensions::new(3, 3))
            .with_feature(FeatureKind::Town, 5, 5)
            .with_camp(9, 9, MonsterCamp::new("Goblin", 1, 10));
        let world = WorldState::generate(&layout);
        assert!(world.camps.is_empty());
        assert_eq!(world.grid.positions_of(FeatureKind::Town.into()).count(), 0);
    }
}
