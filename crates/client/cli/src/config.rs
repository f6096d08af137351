//! CLI configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Where content comes from and how the scripted battle is run.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub map_name: String,
    pub move_range: Option<u32>,
    pub step_ms: Option<u64>,
    pub rounds: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            config_path: None,
            map_name: "skirmish".to_owned(),
            move_range: None,
            step_ms: None,
            rounds: 2,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DATA_DIR` - Content directory (default: bundled content)
    /// - `BATTLE_CONFIG` - Battle rules TOML overriding `<data>/config.toml`
    /// - `BATTLE_MAP` - Map and placement name (default: skirmish)
    /// - `BATTLE_MOVE_RANGE` - Override the loaded move range
    /// - `BATTLE_STEP_MS` - Override the per-step transition duration
    /// - `BATTLE_ROUNDS` - Full rounds to play (default: 2)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("BATTLE_DATA_DIR").ok().map(PathBuf::from);
        config.config_path = env::var("BATTLE_CONFIG").ok().map(PathBuf::from);

        if let Ok(map_name) = env::var("BATTLE_MAP") {
            config.map_name = map_name;
        }

        config.move_range = read_env::<u32>("BATTLE_MOVE_RANGE");
        config.step_ms = read_env::<u64>("BATTLE_STEP_MS");

        if let Some(rounds) = read_env::<usize>("BATTLE_ROUNDS") {
            config.rounds = rounds.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
