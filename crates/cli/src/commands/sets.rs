//! Generate, filter, and print armor sets.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use loadout_core::{
    ArmorItem, ArmorSet, StatFilters, StatKind, StatVector, alternate_perk, first_valid_set,
    num_valid_sets, set_power,
};
use serde_json::json;

use super::{OutputFormat, SessionArgs};
use crate::config::CliConfig;

/// Print the best sets for the current locks and filters
#[derive(Parser)]
pub struct Sets {
    #[command(flatten)]
    session: SessionArgs,

    /// Number of sets to print (defaults to LOADOUT_MAX_SETS or 10)
    #[arg(short = 'n', long, value_name = "COUNT")]
    limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Sets {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let mut planner = self.session.open(config).await?;
        let limit = self.limit.unwrap_or(config.max_sets).max(1);

        let generated = planner.sets();
        let filtered = planner.filtered_sets();
        let ranges = planner.stat_ranges();
        tracing::info!(
            "{} of {} sets pass the filters for {}",
            filtered.len(),
            generated.len(),
            planner.class()
        );

        let shown = &filtered[..filtered.len().min(limit)];
        match self.format {
            OutputFormat::Summary => {
                print_summary(generated.len(), filtered.len(), &ranges, shown);
            }
            OutputFormat::Json => print_json(&ranges, shown)?,
        }
        Ok(())
    }
}

fn item_label(item: &ArmorItem) -> String {
    if item.name.is_empty() {
        format!("#{}", item.id.0)
    } else {
        item.name.clone()
    }
}

fn format_stats(stats: &StatVector) -> String {
    StatKind::ALL
        .iter()
        .map(|&stat| format!("{} {}", stat, stats[stat]))
        .collect::<Vec<_>>()
        .join(" / ")
}

fn print_summary(generated: usize, filtered: usize, ranges: &StatFilters, sets: &[ArmorSet]) {
    println!("{}", style("=== Armor Sets ===").bold().green());
    println!(
        "{} {} of {} generated",
        style("Matching:").bold().cyan(),
        filtered,
        generated
    );
    for stat in StatKind::ALL {
        let range = ranges.range(stat);
        println!(
            "{} {}..={}",
            style(format!("{}:", stat)).bold().cyan(),
            range.min,
            range.max
        );
    }

    if sets.is_empty() {
        println!();
        println!("{}", style("No sets match the current locks and filters").yellow());
        return;
    }

    for set in sets {
        println!();
        println!(
            "{} tier {}  power {}  {} loadout(s)",
            style(format!("Set {}", set.id)).bold().yellow(),
            set.total_tier(),
            set_power(set),
            num_valid_sets(set)
        );
        println!("  {}", style(format_stats(&set.stats)).dim());

        let Some(items) = first_valid_set(set) else {
            println!("  {}", style("No loadout with at most one exotic").red());
            continue;
        };
        for (item, mix) in items.iter().zip(&set.stat_choices) {
            let hint = alternate_perk(item, mix)
                .map(|plug| format!("  (switch to {})", plug.name))
                .unwrap_or_default();
            println!(
                "  {:<10} {} [{}]{}",
                item.slot.as_ref(),
                item_label(item),
                item.base_power,
                style(hint).cyan()
            );
        }
    }
}

fn print_json(ranges: &StatFilters, sets: &[ArmorSet]) -> Result<()> {
    let sets: Vec<_> = sets
        .iter()
        .map(|set| {
            json!({
                "id": set.id,
                "tier": set.total_tier(),
                "power": set_power(set),
                "valid_sets": num_valid_sets(set),
                "stats": set.stats,
                "loadout": first_valid_set(set).map(|items| {
                    items.iter().map(|item| item.id).collect::<Vec<_>>()
                }),
                "set": set,
            })
        })
        .collect();
    let output = json!({ "stat_ranges": ranges, "sets": sets });
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize sets to JSON")?;
    println!("{}", json);
    Ok(())
}
