//! List perks, reachable perks, or search perk names.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use loadout_core::{Plug, Slot};
use serde_json::json;

use super::{OutputFormat, SessionArgs};
use crate::config::CliConfig;

/// Print perks for the current class
///
/// With perks locked, prints only the perks still reachable alongside them.
#[derive(Parser)]
pub struct Perks {
    #[command(flatten)]
    session: SessionArgs,

    /// Only perks whose name contains this text
    #[arg(short, long, value_name = "TEXT")]
    query: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Perks {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let mut planner = self.session.open(config).await?;

        let (title, perks): (&str, Vec<(Slot, Vec<Plug>)>) = if let Some(query) = &self.query {
            ("Matching Perks", planner.search_perks(query))
        } else {
            let filtered = planner.filtered_perks();
            if filtered.is_empty() {
                ("Perks", planner.perk_catalog().into_iter().collect())
            } else {
                (
                    "Reachable Perks",
                    filtered
                        .iter()
                        .map(|(&slot, plugs)| (slot, plugs.iter().cloned().collect()))
                        .collect(),
                )
            }
        };

        match self.format {
            OutputFormat::Summary => {
                println!("{}", style(format!("=== {} ===", title)).bold().green());
                if perks.is_empty() {
                    println!("{}", style("No perks found").yellow());
                }
                for (slot, plugs) in &perks {
                    println!("{}", style(format!("{}:", slot)).bold().yellow());
                    for plug in plugs {
                        println!("  {} {}", plug.name, style(plug.hash.0).dim());
                    }
                }
            }
            OutputFormat::Json => {
                let output: Vec<_> = perks
                    .iter()
                    .map(|(slot, plugs)| json!({ "slot": slot, "perks": plugs }))
                    .collect();
                let json = serde_json::to_string_pretty(&output)
                    .context("Failed to serialize perks to JSON")?;
                println!("{}", json);
            }
        }
        Ok(())
    }
}
