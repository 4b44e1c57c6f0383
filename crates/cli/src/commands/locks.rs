//! Show and save the effective lock map.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use loadout_content::LockMapLoader;
use loadout_core::{ArmorItem, LockedItem, Slot};

use super::SessionArgs;
use crate::config::CliConfig;

/// Print the lock map after applying command-line locks
#[derive(Parser)]
pub struct Locks {
    #[command(flatten)]
    session: SessionArgs,

    /// Write the resulting lock map to this file
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,
}

impl Locks {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let planner = self.session.open(config).await?;
        let lock_map = planner.lock_map();

        println!("{}", style("=== Locks ===").bold().green());
        if lock_map.is_empty() {
            println!("{}", style("Nothing locked").dim());
        }
        for (slot, entries) in lock_map.iter() {
            println!("{}", style(format!("{}:", slot)).bold().yellow());
            for entry in entries {
                println!("  {}", describe(slot, entry));
            }
        }

        let grouped = lock_map.grouped_by_kind();
        if !grouped.is_empty() {
            let counts: Vec<String> = grouped
                .iter()
                .map(|(kind, entries)| format!("{} {}", entries.len(), kind))
                .collect();
            println!("{} {}", style("Totals:").bold().cyan(), counts.join(", "));
        }

        if let Some(path) = &self.save {
            LockMapLoader::save(path, lock_map)?;
            println!(
                "{} {}",
                style("Saved:").bold().cyan(),
                style(path.display()).dim()
            );
        }
        Ok(())
    }
}

fn describe(slot: Slot, entry: &LockedItem) -> String {
    match entry {
        LockedItem::Item(item) => format!("item {} ({})", item.id.0, label(item, slot)),
        LockedItem::Exclude(item) => format!("exclude {} ({})", item.id.0, label(item, slot)),
        LockedItem::Perk(plug) => format!("perk {}", plug.name),
        LockedItem::Burn(burn) => format!("burn {}", burn),
    }
}

fn label(item: &ArmorItem, slot: Slot) -> String {
    if item.name.is_empty() {
        slot.to_string()
    } else {
        item.name.clone()
    }
}
