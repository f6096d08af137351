//! Battle map loader.
//!
//! Loads terrain only. Actor placement lives in separate placement files.

use std::collections::HashMap;
use std::path::Path;

use battle_core::{GridDimensions, HexCoord, StaticTile, TerrainKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Tile table produced by [`MapLoader`].
pub type MapTiles = HashMap<HexCoord, StaticTile>;

/// Map data structure for RON files (terrain only).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    dimensions: (u32, u32),
    #[serde(default)]
    tiles: Vec<(i32, i32, TerrainKind)>, // (q, r, terrain)
}

/// Loader for battle maps from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map from a RON file.
    ///
    /// Every cell inside the dimensions starts as [`TerrainKind::Floor`];
    /// listed tiles override it.
    pub fn load(path: &Path) -> LoadResult<(GridDimensions, MapTiles)> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load map {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<(GridDimensions, MapTiles)> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let dimensions = GridDimensions::new(data.dimensions.0, data.dimensions.1);

        let mut tiles: MapTiles = dimensions
            .cells()
            .map(|cell| (cell, StaticTile::new(TerrainKind::Floor)))
            .collect();

        for (q, r, terrain) in data.tiles {
            let cell = HexCoord::new(q, r);
            if !dimensions.contains(cell) {
                anyhow::bail!(
                    "tile {} lies outside the {}x{} map",
                    cell,
                    dimensions.width,
                    dimensions.height
                );
            }
            tiles.insert(cell, StaticTile::new(terrain));
        }

        Ok((dimensions, tiles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_cells_default_to_floor() {
        let (dimensions, tiles) = MapLoader::parse(
            "(dimensions: (3, 2), tiles: [(1, 0, Wall), (2, 1, Custom(7))])",
        )
        .unwrap();

        assert_eq!(dimensions, GridDimensions::new(3, 2));
        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[&HexCoord::new(0, 0)].terrain(), TerrainKind::Floor);
        assert_eq!(tiles[&HexCoord::new(1, 0)].terrain(), TerrainKind::Wall);
        assert_eq!(tiles[&HexCoord::new(2, 1)].terrain(), TerrainKind::Custom(7));
    }

    #[test]
    fn tiles_outside_dimensions_are_rejected() {
        let err = MapLoader::parse("(dimensions: (2, 2), tiles: [(2, 0, Wall)])").unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn malformed_ron_is_reported() {
        assert!(MapLoader::parse("(dimensions: 4)").is_err());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arena.ron");
        std::fs::write(&path, "(dimensions: (4, 4))").unwrap();

        let (dimensions, tiles) = MapLoader::load(&path).unwrap();
        assert_eq!(dimensions.width, 4);
        assert!(tiles.values().all(|tile| tile.is_passable()));
    }
}
