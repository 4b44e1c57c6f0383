//! Armor loadout planner binary.
//!
//! Loads an inventory snapshot, builder settings, and saved locks from a
//! content directory, applies any locks given on the command line, and prints
//! the resulting sets or perks.
//!
//! # Examples
//!
//! ```bash
//! # Best sets for the sample content
//! cargo run -p loadout-cli -- sets
//!
//! # Pin an item and require a burn, then print JSON
//! cargo run -p loadout-cli -- sets --lock-item 1 --burn chest:void --format json
//!
//! # Perks still reachable on class items
//! cargo run -p loadout-cli -- perks --perk "class_item:Heavy Ammo Finder"
//! ```

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Locks, Perks, Sets};

use crate::config::CliConfig;

/// Armor loadout planner
#[derive(Parser)]
#[command(name = "loadout")]
#[command(about = "Plan armor loadouts from an inventory snapshot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate, filter, and print armor sets
    Sets(Sets),

    /// List perks, reachable perks, or search perk names
    Perks(Perks),

    /// Show the effective lock map, optionally saving it
    Locks(Locks),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Sets(cmd) => cmd.execute(&config).await,
        Command::Perks(cmd) => cmd.execute(&config).await,
        Command::Locks(cmd) => cmd.execute(&config).await,
    }
}
