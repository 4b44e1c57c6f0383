//! Armor items, sockets, and plug (perk) definitions.

use super::slot::{ClassType, Slot};
use super::stats::{InvestmentStat, StatVector, bonus_vector};

/// Unique instance id of an inventory item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u64);

/// Definition hash shared by every copy of the same base item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemHash(pub u32);

/// Definition hash of a plug (perk, mod, ornament).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlugHash(pub u32);

/// Rarity tier. Discriminants match the game's `tierType` values.
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
pub enum TierType {
    #[default]
    Unknown = 0,
    Currency = 1,
    Basic = 2,
    Common = 3,
    Rare = 4,
    Superior = 5,
    Exotic = 6,
}

/// Damage-type affinity ("burn").
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
pub enum Burn {
    Arc,
    Solar,
    Void,
}

/// A plug definition: something that can be inserted into a socket.
///
/// Field order matters: the derived ordering sorts plugs by hash first.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plug {
    pub hash: PlugHash,
    pub index: u32,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub plug_category: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tier_type: TierType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub item_categories: Vec<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub investment_stats: Vec<InvestmentStat>,
}

impl Plug {
    pub fn new(hash: u32, name: impl Into<String>) -> Self {
        Self {
            hash: PlugHash(hash),
            index: hash,
            name: name.into(),
            plug_category: 0,
            tier_type: TierType::Common,
            item_categories: Vec::new(),
            investment_stats: Vec::new(),
        }
    }

    pub fn with_category(mut self, plug_category: u32) -> Self {
        self.plug_category = plug_category;
        self
    }

    pub fn with_tier(mut self, tier_type: TierType) -> Self {
        self.tier_type = tier_type;
        self
    }

    pub fn with_index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }

    pub fn with_stats(mut self, stats: impl IntoIterator<Item = InvestmentStat>) -> Self {
        self.investment_stats.extend(stats);
        self
    }

    /// Stat bonus granted when this plug is selected.
    pub fn stat_bonus(&self) -> StatVector {
        bonus_vector(&self.investment_stats)
    }
}

/// A socket on an item: the selected plug plus every selectable option.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Socket {
    #[cfg_attr(feature = "serde", serde(default))]
    pub plug: Option<Plug>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub plug_options: Vec<Plug>,
}

impl Socket {
    /// Socket whose options are `options`, with the first one selected.
    pub fn with_options(options: Vec<Plug>) -> Self {
        Self {
            plug: options.first().cloned(),
            plug_options: options,
        }
    }

    /// True when any option has the given hash.
    pub fn offers(&self, hash: PlugHash) -> bool {
        self.plug_options.iter().any(|p| p.hash == hash)
    }
}

/// An equippable inventory entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorItem {
    pub id: ItemId,
    pub hash: ItemHash,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub class_type: ClassType,
    pub slot: Slot,
    pub base_power: u32,
    /// Non-empty only for exotics; at most one labeled item per loadout.
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipping_label: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tier_type: TierType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: StatVector,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sockets: Option<Vec<Socket>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub burn: Option<Burn>,
}

impl ArmorItem {
    /// Creates a legendary item with no sockets.
    pub fn new(id: u64, hash: u32, slot: Slot, base_power: u32) -> Self {
        Self {
            id: ItemId(id),
            hash: ItemHash(hash),
            name: String::new(),
            class_type: ClassType::Unknown,
            slot,
            base_power,
            equipping_label: None,
            tier_type: TierType::Superior,
            stats: StatVector::ZERO,
            sockets: None,
            equipped: false,
            burn: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn for_class(mut self, class_type: ClassType) -> Self {
        self.class_type = class_type;
        self
    }

    /// Marks the item exotic with the given equipping label.
    pub fn exotic(mut self, label: impl Into<String>) -> Self {
        self.equipping_label = Some(label.into());
        self.tier_type = TierType::Exotic;
        self
    }

    pub fn with_stats(mut self, stats: StatVector) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_sockets(mut self, sockets: Vec<Socket>) -> Self {
        self.sockets = Some(sockets);
        self
    }

    pub fn with_burn(mut self, burn: Burn) -> Self {
        self.burn = Some(burn);
        self
    }

    pub fn equipped(mut self) -> Self {
        self.equipped = true;
        self
    }

    /// True when the item carries a non-empty equipping label.
    pub fn is_exotic(&self) -> bool {
        self.equipping_label
            .as_deref()
            .is_some_and(|label| !label.is_empty())
    }

    pub fn sockets(&self) -> &[Socket] {
        self.sockets.as_deref().unwrap_or(&[])
    }

    /// True when any socket offers the plug as an option.
    pub fn offers_plug(&self, hash: PlugHash) -> bool {
        self.sockets().iter().any(|socket| socket.offers(hash))
    }

    /// Every stat mix this item can contribute.
    ///
    /// Sockets with more than one option whose plugs carry investment stats
    /// define the choices: each such plug yields `base + bonus`. Items without
    /// such a socket contribute their base stats only. Duplicate mixes are
    /// dropped, first occurrence wins.
    pub fn stat_mixes(&self) -> Vec<StatVector> {
        let mut mixes: Vec<StatVector> = Vec::new();
        for socket in self.sockets() {
            if socket.plug_options.len() < 2 {
                continue;
            }
            for plug in &socket.plug_options {
                if plug.investment_stats.is_empty() {
                    continue;
                }
                let mix = self.stats + plug.stat_bonus();
                if !mixes.contains(&mix) {
                    mixes.push(mix);
                }
            }
        }
        if mixes.is_empty() {
            mixes.push(self.stats);
        }
        mixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::stats::StatKind;

    fn stat_plug(hash: u32, stat: StatKind) -> Plug {
        Plug::new(hash, format!("plug {hash}")).with_stats([InvestmentStat::new(stat, 1)])
    }

    #[test]
    fn empty_label_is_not_exotic() {
        let mut item = ArmorItem::new(1, 10, Slot::Helmet, 600);
        assert!(!item.is_exotic());
        item.equipping_label = Some(String::new());
        assert!(!item.is_exotic());
        assert!(item.exotic("exotic").is_exotic());
    }

    #[test]
    fn stat_mixes_fall_back_to_base_stats() {
        let item = ArmorItem::new(1, 10, Slot::Chest, 600).with_stats(StatVector::new(1, 2, 0));
        assert_eq!(item.stat_mixes(), vec![StatVector::new(1, 2, 0)]);
    }

    #[test]
    fn stat_mixes_follow_selectable_stat_plugs() {
        let item = ArmorItem::new(1, 10, Slot::Chest, 600)
            .with_stats(StatVector::new(1, 1, 1))
            .with_sockets(vec![
                Socket::with_options(vec![
                    stat_plug(100, StatKind::Mobility),
                    stat_plug(101, StatKind::Recovery),
                    stat_plug(102, StatKind::Recovery),
                ]),
                // A single-option socket never offers a choice.
                Socket::with_options(vec![stat_plug(200, StatKind::Resilience)]),
            ]);

        assert_eq!(
            item.stat_mixes(),
            vec![StatVector::new(2, 1, 1), StatVector::new(1, 1, 2)]
        );
    }
}
