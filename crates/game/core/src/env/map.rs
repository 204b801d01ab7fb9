use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of an in-bounds position.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    /// Maps a pointer location in pixels to the grid cell under it.
    ///
    /// Returns `None` when the pointer is outside the map area or `tile_size` is zero.
    pub fn cell_at_pixel(&self, px: i32, py: i32, tile_size: u32) -> Option<Position> {
        if tile_size == 0 || px < 0 || py < 0 {
            return None;
        }
        let tile_size = tile_size as i32;
        let position = Position::new(px / tile_size, py / tile_size);
        self.contains(position).then_some(position)
    }
}

/// Base terrain classes that cover the map before features are placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[strum(serialize = "Grassland")]
    Plain,
    Forest,
    #[strum(serialize = "Mountains")]
    Mountain,
    Water,
    Desert,
    Snow,
    Swamp,
}

impl TerrainKind {
    /// Water is the only terrain a hero cannot enter.
    pub const fn is_passable(self) -> bool {
        !matches!(self, TerrainKind::Water)
    }
}

/// Map objects that trigger an event when the hero steps on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeatureKind {
    Town,
    #[strum(serialize = "Treasure Chest")]
    Treasure,
    #[strum(serialize = "Resource Pile")]
    Resource,
    #[strum(serialize = "Monster Camp")]
    MonsterCamp,
    Library,
    Arena,
    Port,
    Ruins,
}

impl FeatureKind {
    /// Whether the feature reverts to plain terrain once its event has resolved.
    ///
    /// Library, arena, port and ruins stay on the map and can be visited again.
    pub const fn is_consumed(self) -> bool {
        matches!(
            self,
            FeatureKind::Treasure | FeatureKind::Resource | FeatureKind::MonsterCamp
        )
    }
}

/// Content of a single grid cell: exactly one terrain or one feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Terrain(TerrainKind),
    Feature(FeatureKind),
}

impl Tile {
    pub const PLAIN: Self = Tile::Terrain(TerrainKind::Plain);

    /// Features stand on passable ground; only terrain can block.
    pub const fn is_passable(self) -> bool {
        match self {
            Tile::Terrain(terrain) => terrain.is_passable(),
            Tile::Feature(_) => true,
        }
    }

    pub const fn feature(self) -> Option<FeatureKind> {
        match self {
            Tile::Feature(feature) => Some(feature),
            Tile::Terrain(_) => None,
        }
    }

    /// Single-letter code used by map data and debug dumps.
    pub const fn code(self) -> char {
        match self {
            Tile::Terrain(TerrainKind::Plain) => 'G',
            Tile::Terrain(TerrainKind::Forest) => 'F',
            Tile::Terrain(TerrainKind::Mountain) => 'M',
            Tile::Terrain(TerrainKind::Water) => 'W',
            Tile::Terrain(TerrainKind::Desert) => 'D',
            Tile::Terrain(TerrainKind::Snow) => 'S',
            Tile::Terrain(TerrainKind::Swamp) => 'B',
            Tile::Feature(FeatureKind::Town) => 'T',
            Tile::Feature(FeatureKind::Treasure) => 'X',
            Tile::Feature(FeatureKind::Resource) => 'R',
            Tile::Feature(FeatureKind::MonsterCamp) => 'C',
            Tile::Feature(FeatureKind::Library) => 'L',
            Tile::Feature(FeatureKind::Arena) => 'A',
            Tile::Feature(FeatureKind::Port) => 'P',
            Tile::Feature(FeatureKind::Ruins) => 'I',
        }
    }

    /// Glyph drawn on top of the tile colour.
    pub const fn symbol(self) -> char {
        match self {
            Tile::Terrain(TerrainKind::Plain) => '.',
            Tile::Terrain(TerrainKind::Forest) => '#',
            Tile::Terrain(TerrainKind::Mountain) => '^',
            Tile::Terrain(TerrainKind::Water) => '~',
            Tile::Terrain(TerrainKind::Desert) => ':',
            Tile::Terrain(TerrainKind::Snow) => '*',
            Tile::Terrain(TerrainKind::Swamp) => '%',
            Tile::Feature(FeatureKind::Resource) => '$',
            Tile::Feature(FeatureKind::MonsterCamp) => '!',
            Tile::Feature(feature) => Tile::Feature(feature).code(),
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::all().find(|tile| tile.code() == code)
    }

    /// Every tile variant, terrains first.
    pub fn all() -> impl Iterator<Item = Tile> {
        TerrainKind::iter()
            .map(Tile::Terrain)
            .chain(FeatureKind::iter().map(Tile::Feature))
    }

    pub fn name(self) -> String {
        match self {
            Tile::Terrain(terrain) => terrain.to_string(),
            Tile::Feature(feature) => feature.to_string(),
        }
    }
}

impl From<TerrainKind> for Tile {
    fn from(terrain: TerrainKind) -> Self {
        Tile::Terrain(terrain)
    }
}

impl From<FeatureKind> for Tile {
    fn from(feature: FeatureKind) -> Self {
        Tile::Feature(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        let codes: Vec<char> = Tile::all().map(Tile::code).collect();
        assert_eq!(codes.len(), TerrainKind::COUNT + FeatureKind::COUNT);
        for (index, code) in codes.iter().enumerate() {
            assert!(
                !codes[index + 1..].contains(code),
                "duplicate tile code {code}"
            );
        }
    }

    #[test]
    fn library_owns_the_l_code() {
        assert_eq!(
            Tile::from_code('L'),
            Some(Tile::Feature(FeatureKind::Library))
        );
        assert_eq!(Tile::from_code('?'), None);
    }

    #[test]
    fn only_water_blocks() {
        for tile in Tile::all() {
            let expected = tile != Tile::Terrain(TerrainKind::Water);
            assert_eq!(tile.is_passable(), expected, "{tile:?}");
        }
    }

    #[test]
    fn pixel_mapping_uses_integer_division() {
        let dims = MapDimensions::new(18, 14);
        assert_eq!(dims.cell_at_pixel(0, 0, 40), Some(Position::new(0, 0)));
        assert_eq!(dims.cell_at_pixel(79, 41, 40), Some(Position::new(1, 1)));
        assert_eq!(dims.cell_at_pixel(18 * 40, 10, 40), None);
        assert_eq!(dims.cell_at_pixel(-1, 10, 40), None);
        assert_eq!(dims.cell_at_pixel(10, 10, 0), None);
    }

    #[test]
    fn contains_rejects_negative_and_edge() {
        let dims = MapDimensions::new(18, 14);
        assert!(dims.contains(Position::new(17, 13)));
        assert!(!dims.contains(Position::new(18, 0)));
        assert!(!dims.contains(Position::new(0, 14)));
        assert!(!dims.contains(Position::new(-1, 0)));
    }
}
