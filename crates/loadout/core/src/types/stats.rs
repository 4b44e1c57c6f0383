//! Armor stat vectors, tier ranges, and range filters.
//!
//! Armor contributes three stats. Sets sum their members' contributions and
//! clamp each stat to the tier scale `0..=MAX_TIER`.

use core::ops::{Add, Index, IndexMut};

use crate::config::BuilderConfig;

/// The three armor stats.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum StatKind {
    Mobility,
    Resilience,
    Recovery,
}

impl StatKind {
    pub const ALL: [StatKind; 3] = [StatKind::Mobility, StatKind::Resilience, StatKind::Recovery];

    /// Stat definition hash used by investment stats in the game manifest.
    pub const fn stat_hash(self) -> u32 {
        match self {
            StatKind::Mobility => 2996146975,
            StatKind::Resilience => 392767087,
            StatKind::Recovery => 1943323491,
        }
    }
}

/// A Mobility / Resilience / Recovery triple.
///
/// Ordering and hashing are structural so vectors can key groupings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatVector {
    pub mobility: i32,
    pub resilience: i32,
    pub recovery: i32,
}

impl StatVector {
    pub const ZERO: StatVector = StatVector::new(0, 0, 0);

    pub const fn new(mobility: i32, resilience: i32, recovery: i32) -> Self {
        Self {
            mobility,
            resilience,
            recovery,
        }
    }

    /// Sum of all three stats.
    pub const fn total(&self) -> i32 {
        self.mobility + self.resilience + self.recovery
    }

    /// Clamps every stat to `0..=MAX_TIER`.
    pub fn clamped_to_tiers(self) -> Self {
        let clamp = |v: i32| v.clamp(0, BuilderConfig::MAX_TIER);
        Self::new(
            clamp(self.mobility),
            clamp(self.resilience),
            clamp(self.recovery),
        )
    }
}

impl Index<StatKind> for StatVector {
    type Output = i32;

    fn index(&self, stat: StatKind) -> &i32 {
        match stat {
            StatKind::Mobility => &self.mobility,
            StatKind::Resilience => &self.resilience,
            StatKind::Recovery => &self.recovery,
        }
    }
}

impl IndexMut<StatKind> for StatVector {
    fn index_mut(&mut self, stat: StatKind) -> &mut i32 {
        match stat {
            StatKind::Mobility => &mut self.mobility,
            StatKind::Resilience => &mut self.resilience,
            StatKind::Recovery => &mut self.recovery,
        }
    }
}

impl Add for StatVector {
    type Output = StatVector;

    fn add(self, rhs: StatVector) -> StatVector {
        StatVector::new(
            self.mobility + rhs.mobility,
            self.resilience + rhs.resilience,
            self.recovery + rhs.recovery,
        )
    }
}

impl core::iter::Sum for StatVector {
    fn sum<I: Iterator<Item = StatVector>>(iter: I) -> Self {
        iter.fold(StatVector::ZERO, Add::add)
    }
}

/// Inclusive tier range for a single stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinMax {
    pub min: i32,
    pub max: i32,
}

impl MinMax {
    /// The whole tier scale.
    pub const FULL: MinMax = MinMax::new(0, BuilderConfig::MAX_TIER);

    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub const fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }

    pub const fn is_full(&self) -> bool {
        self.min == 0 && self.max == BuilderConfig::MAX_TIER
    }
}

impl Default for MinMax {
    fn default() -> Self {
        Self::FULL
    }
}

/// Per-stat tier ranges a set must fall inside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatFilters {
    pub mobility: MinMax,
    pub resilience: MinMax,
    pub recovery: MinMax,
}

impl StatFilters {
    /// Filters that accept every set.
    pub const FULL: StatFilters = StatFilters {
        mobility: MinMax::FULL,
        resilience: MinMax::FULL,
        recovery: MinMax::FULL,
    };

    pub const fn range(&self, stat: StatKind) -> &MinMax {
        match stat {
            StatKind::Mobility => &self.mobility,
            StatKind::Resilience => &self.resilience,
            StatKind::Recovery => &self.recovery,
        }
    }

    pub fn range_mut(&mut self, stat: StatKind) -> &mut MinMax {
        match stat {
            StatKind::Mobility => &mut self.mobility,
            StatKind::Resilience => &mut self.resilience,
            StatKind::Recovery => &mut self.recovery,
        }
    }

    /// True when every range spans the whole tier scale.
    pub fn is_full_range(&self) -> bool {
        StatKind::ALL.iter().all(|&stat| self.range(stat).is_full())
    }

    /// True when every stat of `stats` lies inside its range.
    pub fn accepts(&self, stats: &StatVector) -> bool {
        StatKind::ALL
            .iter()
            .all(|&stat| self.range(stat).contains(stats[stat]))
    }
}

/// An investment stat carried by a plug (perk) definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvestmentStat {
    pub stat: StatKind,
    pub value: i32,
}

impl InvestmentStat {
    pub const fn new(stat: StatKind, value: i32) -> Self {
        Self { stat, value }
    }
}

/// Folds investment stats into a bonus vector.
pub fn bonus_vector(stats: &[InvestmentStat]) -> StatVector {
    stats.iter().fold(StatVector::ZERO, |mut acc, s| {
        acc[s.stat] += s.value;
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_stats_on_tier_scale() {
        let raw = StatVector::new(12, -1, 4);
        assert_eq!(raw.clamped_to_tiers(), StatVector::new(10, 0, 4));
    }

    #[test]
    fn sum_adds_componentwise() {
        let total: StatVector = [StatVector::new(1, 2, 3), StatVector::new(3, 2, 1)]
            .into_iter()
            .sum();
        assert_eq!(total, StatVector::new(4, 4, 4));
        assert_eq!(total.total(), 12);
    }

    #[test]
    fn default_filters_span_full_range() {
        assert!(StatFilters::default().is_full_range());

        let mut filters = StatFilters::FULL;
        filters.range_mut(StatKind::Recovery).min = 3;
        assert!(!filters.is_full_range());
        assert!(filters.accepts(&StatVector::new(0, 0, 3)));
        assert!(!filters.accepts(&StatVector::new(10, 10, 2)));
    }

    #[test]
    fn bonus_vector_sums_repeated_stats() {
        let bonus = bonus_vector(&[
            InvestmentStat::new(StatKind::Mobility, 1),
            InvestmentStat::new(StatKind::Mobility, 1),
            InvestmentStat::new(StatKind::Recovery, 2),
        ]);
        assert_eq!(bonus, StatVector::new(2, 0, 2));
    }
}
