//! Builder configuration constants and user-tunable filter settings.

use crate::error::ConfigError;
use crate::types::{ClassType, StatFilters, StatKind};

/// Settings that drive set filtering and ordering.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderConfig {
    /// Class whose inventory is used to build sets.
    pub class: ClassType,

    /// Sets whose resolved mean power is below this are dropped. Zero disables
    /// the check.
    pub minimum_power: u32,

    /// Per-stat tier ranges.
    pub stat_filters: StatFilters,

    /// Tie-break order after total tier, highest priority first.
    pub stat_order: [StatKind; 3],
}

impl BuilderConfig {
    // ===== compile-time constants =====
    /// Highest tier a single stat can reach.
    pub const MAX_TIER: i32 = 10;
    /// Number of stat-bearing slots in a generated set.
    pub const ARMOR_SLOTS: usize = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STAT_ORDER: [StatKind; 3] = StatKind::ALL;

    pub fn new(class: ClassType) -> Self {
        Self {
            class,
            minimum_power: 0,
            stat_filters: StatFilters::FULL,
            stat_order: Self::DEFAULT_STAT_ORDER,
        }
    }

    pub fn with_minimum_power(mut self, minimum_power: u32) -> Self {
        self.minimum_power = minimum_power;
        self
    }

    pub fn with_stat_filters(mut self, stat_filters: StatFilters) -> Self {
        self.stat_filters = stat_filters;
        self
    }

    pub fn with_stat_order(mut self, stat_order: [StatKind; 3]) -> Self {
        self.stat_order = stat_order;
        self
    }

    /// Checks ranges lie on the tier scale and the stat order is a permutation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.class == ClassType::Unknown {
            return Err(ConfigError::UnplayableClass);
        }

        for stat in StatKind::ALL {
            let range = self.stat_filters.range(stat);
            for value in [range.min, range.max] {
                if !(0..=Self::MAX_TIER).contains(&value) {
                    return Err(ConfigError::TierOutOfRange { stat, value });
                }
            }
            if range.min > range.max {
                return Err(ConfigError::InvertedRange {
                    stat,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        for (i, stat) in self.stat_order.iter().enumerate() {
            if self.stat_order[..i].contains(stat) {
                return Err(ConfigError::DuplicateStatOrder(*stat));
            }
        }

        Ok(())
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new(ClassType::Titan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MinMax;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(BuilderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_and_out_of_scale_ranges() {
        let mut filters = StatFilters::FULL;
        filters.mobility = MinMax::new(6, 2);
        let config = BuilderConfig::default().with_stat_filters(filters);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedRange {
                stat: StatKind::Mobility,
                min: 6,
                max: 2
            })
        );

        let mut filters = StatFilters::FULL;
        filters.recovery = MinMax::new(0, 11);
        let config = BuilderConfig::default().with_stat_filters(filters);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TierOutOfRange {
                stat: StatKind::Recovery,
                value: 11
            })
        );
    }

    #[test]
    fn rejects_repeated_stat_in_order() {
        let config = BuilderConfig::default().with_stat_order([
            StatKind::Recovery,
            StatKind::Mobility,
            StatKind::Recovery,
        ]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateStatOrder(StatKind::Recovery))
        );
    }

    #[test]
    fn rejects_unknown_class() {
        assert_eq!(
            BuilderConfig::new(ClassType::Unknown).validate(),
            Err(ConfigError::UnplayableClass)
        );
    }
}
