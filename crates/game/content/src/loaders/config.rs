//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`BattleConfig`] from a TOML file.
    ///
    /// Keys that are absent keep their defaults.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.max_route_steps == 0 {
            anyhow::bail!("max_route_steps must be at least 1");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigLoader::parse("move_range = 5\n").unwrap();
        assert_eq!(config.move_range, 5);
        assert_eq!(config.step_duration_ms, BattleConfig::DEFAULT_STEP_DURATION_MS);
        assert_eq!(config.max_route_steps, BattleConfig::DEFAULT_MAX_ROUTE_STEPS);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "move_range = 2\nstep_duration_ms = 10").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config, BattleConfig::new().with_move_range(2).with_step_duration_ms(10));
    }

    #[test]
    fn zero_route_limit_is_rejected() {
        assert!(ConfigLoader::parse("max_route_steps = 0").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/battle.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/battle.toml"));
    }
}
