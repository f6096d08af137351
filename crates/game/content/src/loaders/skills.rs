//! Skill catalog loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::skills::{SkillData, SkillRegistry};

/// Loader for the JSON skill catalog.
pub struct SkillLoader;

impl SkillLoader {
    /// Load a JSON array of skills into a [`SkillRegistry`].
    ///
    /// A duplicate or blank id fails the whole load.
    pub fn load(path: &Path) -> LoadResult<SkillRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SkillRegistry> {
        if content.trim().is_empty() {
            anyhow::bail!("skill catalog is empty");
        }

        let skills: Vec<SkillData> = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skills JSON: {}", e))?;

        SkillRegistry::from_skills(skills)
            .map_err(|e| anyhow::anyhow!("Invalid skill catalog: {}", e))
    }
}
