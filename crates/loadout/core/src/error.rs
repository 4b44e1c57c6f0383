//! Error types for loadout-core.
//!
//! The algorithms themselves never fail: empty inventories, unreachable exotic
//! resolutions, and empty lock maps produce empty results or `None`. Errors
//! only describe settings that cannot be honored.

use crate::types::StatKind;

/// Invalid builder settings.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{stat} tier {value} is outside 0..=10")]
    TierOutOfRange { stat: StatKind, value: i32 },

    #[error("{stat} range is inverted (min {min} > max {max})")]
    InvertedRange { stat: StatKind, min: i32, max: i32 },

    #[error("{0} appears more than once in the stat order")]
    DuplicateStatOrder(StatKind),

    #[error("sets can only be built for a playable class")]
    UnplayableClass,
}
