use crate::env::{MapDimensions, Tile};
use crate::state::Position;

/// Mutable row-major grid of tiles.
///
/// Every cell holds exactly one [`Tile`]; only consumable features change
/// after generation, and only back to plain terrain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    dimensions: MapDimensions,
    cells: Vec<Tile>,
}

impl TileGrid {
    /// Creates a grid filled with a single tile.
    pub fn filled(dimensions: MapDimensions, tile: Tile) -> Self {
        Self {
            dimensions,
            cells: vec![tile; dimensions.area()],
        }
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// Tile at a position, `None` outside the map.
    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.dimensions
            .index_of(position)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// False outside the map or on impassable terrain.
    pub fn is_passable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(Tile::is_passable)
    }

    /// Overwrites a cell. Returns false (and changes nothing) outside the map.
    pub fn set(&mut self, position: Position, tile: Tile) -> bool {
        match self
            .dimensions
            .index_of(position)
            .and_then(|index| self.cells.get_mut(index))
        {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Reverts a consumed feature (treasure, resource, monster camp) to plain terrain.
    ///
    /// Returns whether the cell changed. Camp registry entries are not touched;
    /// use [`WorldState::take_camp`](crate::state::WorldState::take_camp) for camps.
    pub fn clear_feature(&mut self, position: Position) -> bool {
        match self.tile(position).and_then(Tile::feature) {
            Some(feature) if feature.is_consumed() => self.set(position, Tile::PLAIN),
            _ => false,
        }
    }

    /// Rows from top to bottom, for drawing.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.dimensions.width.max(1) as usize)
    }

    /// Positions of every cell holding the given tile.
    pub fn positions_of(&self, tile: Tile) -> impl Iterator<Item = Position> + '_ {
        let width = self.dimensions.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == tile)
            .map(move |(index, _)| Position::new((index % width) as i32, (index / width) as i32))
    }
}
