use crate::hex::HexCoord;

/// Static terrain oracle exposing the immutable battle-map layout.
pub trait TerrainOracle: Send + Sync {
    fn dimensions(&self) -> GridDimensions;

    /// Returns the tile at `cell`, or `None` when the map has no cell there.
    fn tile(&self, cell: HexCoord) -> Option<StaticTile>;

    fn contains(&self, cell: HexCoord) -> bool {
        self.dimensions().contains(cell)
    }

    /// True when a tile exists at `cell` and its terrain can be entered.
    fn is_passable(&self, cell: HexCoord) -> bool {
        self.tile(cell).is_some_and(StaticTile::is_passable)
    }
}

/// Rectangular extent of a battle map in axial `(q, r)` space, anchored at the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A grid with a zero-length side cannot host a battle.
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn contains(&self, cell: HexCoord) -> bool {
        cell.q >= 0 && cell.r >= 0 && cell.q < self.width as i32 && cell.r < self.height as i32
    }

    /// Iterates every cell of the rectangle row by row.
    pub fn cells(&self) -> impl Iterator<Item = HexCoord> + '_ {
        (0..self.height as i32)
            .flat_map(move |r| (0..self.width as i32).map(move |q| HexCoord::new(q, r)))
    }
}

/// Immutable descriptor for a tile in the static layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    terrain: TerrainKind,
}

impl StaticTile {
    /// Creates a tile with the given base terrain. Occupancy belongs to the
    /// runtime battlefield rather than the terrain oracle.
    pub const fn new(terrain: TerrainKind) -> Self {
        Self { terrain }
    }

    pub fn terrain(self) -> TerrainKind {
        self.terrain
    }

    pub fn is_passable(self) -> bool {
        self.terrain.is_passable()
    }
}

/// Canonical terrain classes for static map tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Floor,
    Wall,
    Void,
    Water,
    Custom(u16),
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }
}
