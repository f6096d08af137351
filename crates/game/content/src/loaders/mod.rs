//! Content loaders for reading battle data from files.
//!
//! Configuration is TOML, maps and placements are RON, and the skill
//! catalog is JSON. Every loader returns battle-core types directly.

pub mod config;
pub mod factory;
pub mod map;
pub mod placements;
pub mod skills;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use map::{MapLoader, MapTiles};
pub use placements::{PlacementLoader, Placements};
pub use skills::SkillLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
