//! Subcommands and the session arguments they share.

mod locks;
mod perks;
mod sets;

pub use locks::Locks;
pub use perks::Perks;
pub use sets::Sets;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::Args;
use loadout_content::ContentFactory;
use loadout_core::{Burn, ClassType, ItemId, LockedItem, Slot};
use loadout_planner::{Planner, PresetPicker};

use crate::config::CliConfig;

/// Content location and lock adjustments applied on top of saved locks.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Content directory (defaults to LOADOUT_DATA_DIR or ./content)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Build for this class instead of the configured one
    #[arg(short, long, value_name = "CLASS", value_parser = parse_class)]
    class: Option<ClassType>,

    /// Ignore saved locks
    #[arg(long)]
    fresh: bool,

    /// Pin the class's equipped armor
    #[arg(long)]
    lock_equipped: bool,

    /// Pin an item by instance id (repeatable)
    #[arg(long, value_name = "ID")]
    lock_item: Vec<u64>,

    /// Never use an item, by instance id (repeatable)
    #[arg(long, value_name = "ID")]
    exclude: Vec<u64>,

    /// Require a perk, as SLOT:NAME (repeatable)
    #[arg(long, value_name = "SLOT:NAME")]
    perk: Vec<String>,

    /// Require a damage type, as SLOT:BURN (repeatable)
    #[arg(long, value_name = "SLOT:BURN")]
    burn: Vec<String>,

    /// Minimum resolved power
    #[arg(long, value_name = "POWER")]
    min_power: Option<u32>,
}

impl SessionArgs {
    /// Load content and build a planner with every requested lock applied.
    pub async fn open(&self, config: &CliConfig) -> Result<Planner> {
        let data_dir = self.data_dir.clone().unwrap_or_else(|| config.data_dir.clone());
        let factory = ContentFactory::new(data_dir.clone());

        let mut builder_config = factory.load_config()?;
        if let Some(class) = self.class {
            builder_config.class = class;
        }
        if let Some(min_power) = self.min_power {
            builder_config.minimum_power = min_power;
        }
        let lock_map = if self.fresh {
            Default::default()
        } else {
            factory.load_locks()?
        };

        let mut planner = Planner::builder()
            .inventory(factory.load_inventory()?)
            .config(builder_config)
            .lock_map(lock_map)
            .build()
            .with_context(|| format!("Failed to open planner for {}", data_dir.display()))?;

        if self.lock_equipped {
            planner.lock_equipped();
        }
        for &id in &self.lock_item {
            let slot = item_slot(&planner, id)?;
            planner
                .choose_lock_item(slot, &PresetPicker::new(ItemId(id)))
                .await?;
        }
        for &id in &self.exclude {
            let slot = item_slot(&planner, id)?;
            planner
                .choose_exclude_item(slot, &PresetPicker::new(ItemId(id)))
                .await?;
        }
        for arg in &self.perk {
            let (slot, name) = split_slot_arg(arg)?;
            let catalog = planner.perk_catalog();
            let plug = catalog
                .get(&slot)
                .and_then(|plugs| plugs.iter().find(|p| p.name.eq_ignore_ascii_case(name)))
                .ok_or_else(|| anyhow!("No perk named {:?} on {} for this class", name, slot))?
                .clone();
            planner.toggle_lock(LockedItem::Perk(plug), slot);
        }
        for arg in &self.burn {
            let (slot, burn) = split_slot_arg(arg)?;
            let burn: Burn = burn
                .parse()
                .map_err(|_| anyhow!("Unknown damage type {:?} (arc, solar, void)", burn))?;
            planner.toggle_lock(LockedItem::Burn(burn), slot);
        }

        Ok(planner)
    }
}

fn item_slot(planner: &Planner, id: u64) -> Result<Slot> {
    planner
        .inventory()
        .find(planner.class(), ItemId(id))
        .map(|item| item.slot)
        .ok_or_else(|| anyhow!("No item {} for {}", id, planner.class()))
}

fn parse_class(value: &str) -> Result<ClassType, String> {
    match value.parse() {
        Ok(ClassType::Unknown) | Err(_) => Err(format!(
            "unknown class {:?} (titan, hunter, warlock)",
            value
        )),
        Ok(class) => Ok(class),
    }
}

fn split_slot_arg(arg: &str) -> Result<(Slot, &str)> {
    let Some((slot, value)) = arg.split_once(':') else {
        bail!("Expected SLOT:VALUE, got {:?}", arg);
    };
    let slot: Slot = slot
        .trim()
        .parse()
        .map_err(|_| anyhow!("Unknown slot {:?}", slot))?;
    Ok((slot, value.trim()))
}

/// Output format shared by the subcommands.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Full JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_args_split_on_first_colon() {
        let (slot, value) = split_slot_arg("Class_Item: Heavy Ammo Finder").unwrap();
        assert_eq!(slot, Slot::ClassItem);
        assert_eq!(value, "Heavy Ammo Finder");

        assert!(split_slot_arg("helmet").is_err());
        assert!(split_slot_arg("cape:void").is_err());
    }

    #[test]
    fn only_playable_classes_parse() {
        assert_eq!(parse_class("hunter"), Ok(ClassType::Hunter));
        assert_eq!(parse_class("WARLOCK"), Ok(ClassType::Warlock));
        assert!(parse_class("unknown").is_err());
        assert!(parse_class("paladin").is_err());
    }
}
