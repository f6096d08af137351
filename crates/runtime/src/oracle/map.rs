//! Static battle layout served through [`battle_core::TerrainOracle`].
use std::collections::HashMap;

use battle_core::{GridDimensions, HexCoord, StaticTile, TerrainKind, TerrainOracle};

/// TerrainOracle implementation with static map data
///
/// Holds the immutable terrain of a battle map. Actor occupancy is tracked by
/// [`crate::Battlefield`], never here.
#[derive(Clone, Debug)]
pub struct HexMapOracle {
    dimensions: GridDimensions,
    tiles: HashMap<HexCoord, StaticTile>,
}

impl HexMapOracle {
    pub fn new(dimensions: GridDimensions, tiles: HashMap<HexCoord, StaticTile>) -> Self {
        Self { dimensions, tiles }
    }

    /// Creates an all-floor map.
    pub fn open(width: u32, height: u32) -> Self {
        let dimensions = GridDimensions::new(width, height);
        let tiles = dimensions
            .cells()
            .map(|cell| (cell, StaticTile::new(TerrainKind::Floor)))
            .collect();
        Self::new(dimensions, tiles)
    }

    /// Replaces the terrain at `cell`, e.g. to drop a wall into a test map.
    pub fn with_terrain(mut self, cell: HexCoord, terrain: TerrainKind) -> Self {
        self.tiles.insert(cell, StaticTile::new(terrain));
        self
    }
}

impl TerrainOracle for HexMapOracle {
    fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    fn tile(&self, cell: HexCoord) -> Option<StaticTile> {
        self.tiles.get(&cell).copied()
    }
}
