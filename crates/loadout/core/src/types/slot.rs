//! Equipment slots and character classes.

/// An equipment position.
///
/// Declaration order is the canonical slot order: lock maps iterate in it,
/// generated sets store their members in it, and locked entries are displayed
/// in it.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Slot {
    Helmet,
    Gauntlets,
    Chest,
    Legs,
    ClassItem,
    Ghost,
}

impl Slot {
    /// All slots in canonical order.
    pub const ALL: [Slot; 6] = [
        Slot::Helmet,
        Slot::Gauntlets,
        Slot::Chest,
        Slot::Legs,
        Slot::ClassItem,
        Slot::Ghost,
    ];

    /// Slots that contribute stats to a generated set.
    pub const ARMOR: [Slot; 5] = [
        Slot::Helmet,
        Slot::Gauntlets,
        Slot::Chest,
        Slot::Legs,
        Slot::ClassItem,
    ];

    /// Inventory bucket hash the game uses for this slot.
    pub const fn bucket_hash(self) -> u32 {
        match self {
            Slot::Helmet => 3448274439,
            Slot::Gauntlets => 3551918588,
            Slot::Chest => 14239492,
            Slot::Legs => 20886954,
            Slot::ClassItem => 1585787867,
            Slot::Ghost => 4023194814,
        }
    }

    /// Looks a slot up by its bucket hash.
    pub fn from_bucket_hash(hash: u32) -> Option<Slot> {
        Slot::ALL.into_iter().find(|slot| slot.bucket_hash() == hash)
    }

    /// True for the five stat-bearing armor slots.
    pub const fn is_armor(self) -> bool {
        !matches!(self, Slot::Ghost)
    }

    /// Position of this slot within [`Slot::ARMOR`], if it is an armor slot.
    pub const fn armor_index(self) -> Option<usize> {
        match self {
            Slot::Helmet => Some(0),
            Slot::Gauntlets => Some(1),
            Slot::Chest => Some(2),
            Slot::Legs => Some(3),
            Slot::ClassItem => Some(4),
            Slot::Ghost => None,
        }
    }
}

/// Character class an item can be equipped by.
///
/// `Unknown` marks class-agnostic items (ghosts, some cosmetics) that every
/// class can use.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ClassType {
    Titan,
    Hunter,
    Warlock,
    #[default]
    Unknown,
}

impl ClassType {
    /// The three playable classes.
    pub const PLAYABLE: [ClassType; 3] = [ClassType::Titan, ClassType::Hunter, ClassType::Warlock];

    /// Classes an item of this class type can be equipped by.
    pub fn usable_by(self) -> &'static [ClassType] {
        match self {
            ClassType::Titan => &[ClassType::Titan],
            ClassType::Hunter => &[ClassType::Hunter],
            ClassType::Warlock => &[ClassType::Warlock],
            ClassType::Unknown => &Self::PLAYABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_hash_round_trips_for_every_slot() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_bucket_hash(slot.bucket_hash()), Some(slot));
        }
        assert_eq!(Slot::from_bucket_hash(1), None);
    }

    #[test]
    fn ghost_is_not_armor() {
        assert!(!Slot::Ghost.is_armor());
        assert_eq!(Slot::Ghost.armor_index(), None);
        assert_eq!(Slot::ClassItem.armor_index(), Some(4));
    }

    #[test]
    fn slot_parses_case_insensitively() {
        assert_eq!("class_item".parse::<Slot>().unwrap(), Slot::ClassItem);
        assert_eq!("HELMET".parse::<Slot>().unwrap(), Slot::Helmet);
    }

    #[test]
    fn unknown_class_is_usable_by_every_class() {
        assert_eq!(ClassType::Unknown.usable_by(), &ClassType::PLAYABLE);
        assert_eq!(ClassType::Hunter.usable_by(), &[ClassType::Hunter]);
    }
}
