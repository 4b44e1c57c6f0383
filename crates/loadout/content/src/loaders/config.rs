//! Builder configuration loader.

use std::path::Path;

use loadout_core::BuilderConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for builder configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a [`BuilderConfig`] from a TOML file.
    ///
    /// Missing keys take their defaults. Ranges off the tier scale, inverted
    /// ranges, a repeated stat in `stat_order`, and the `Unknown` class are
    /// rejected.
    pub fn load(path: &Path) -> LoadResult<BuilderConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> LoadResult<BuilderConfig> {
        let config: BuilderConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse builder config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid builder config: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use loadout_core::{ClassType, MinMax, StatKind};

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn reads_every_field() {
        let config = ConfigLoader::parse(
            r#"
            class = "Warlock"
            minimum_power = 630
            stat_order = ["Recovery", "Resilience", "Mobility"]

            [stat_filters.recovery]
            min = 5
            max = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.class, ClassType::Warlock);
        assert_eq!(config.minimum_power, 630);
        assert_eq!(config.stat_order[0], StatKind::Recovery);
        assert_eq!(config.stat_filters.recovery, MinMax::new(5, 10));
        assert!(config.stat_filters.mobility.is_full());
    }

    #[test]
    fn rejects_invalid_settings() {
        let err = ConfigLoader::parse(
            r#"
            [stat_filters.mobility]
            min = 8
            max = 3
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("inverted"));

        assert!(ConfigLoader::parse(r#"stat_order = ["Mobility", "Mobility", "Recovery"]"#).is_err());
        assert!(ConfigLoader::parse(r#"class = "Unknown""#).is_err());
    }
}
