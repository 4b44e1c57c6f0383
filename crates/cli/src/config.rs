//! Environment-driven defaults for the command line.
use std::env;
use std::path::PathBuf;

/// Command-line defaults read from the environment.
///
/// Flags given on the command line always win over these.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `inventory.ron`, `builder.toml`, and `locks.ron`.
    pub data_dir: PathBuf,
    /// Number of sets printed by `loadout sets`.
    pub max_sets: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("content"),
            max_sets: 10,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LOADOUT_DATA_DIR` - Content directory (default: `content`)
    /// - `LOADOUT_MAX_SETS` - Sets to print (default: 10, minimum 1)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("LOADOUT_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(max_sets) = read_env::<usize>("LOADOUT_MAX_SETS") {
            config.max_sets = max_sets.max(1);
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
