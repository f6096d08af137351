//! Content factory for loading battle content from a data directory.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, GridDimensions};

use crate::loaders::{
    ConfigLoader, LoadResult, MapLoader, MapTiles, PlacementLoader, Placements, SkillLoader,
};
use crate::skills::SkillRegistry;

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── skills.json
/// ├── maps/
/// │   └── skirmish.ron
/// └── placements/
///     └── skirmish.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory rooted at the data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the skill catalog from `skills.json`.
    pub fn load_skills(&self) -> LoadResult<SkillRegistry> {
        SkillLoader::load(&self.data_dir.join("skills.json"))
    }

    /// Load a map from `maps/{map_name}.ron`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<(GridDimensions, MapTiles)> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Load starting placements from `placements/{map_name}.ron`.
    pub fn load_placements(&self, map_name: &str) -> LoadResult<Placements> {
        let path = self
            .data_dir
            .join("placements")
            .join(format!("{}.ron", map_name));
        PlacementLoader::load(&path)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
