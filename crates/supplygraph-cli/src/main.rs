//! SupplyGraph CLI - interactive shell for the supply-chain graph engine.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use supplygraph_core::{FlowStore, SupplyConfig};
use tracing_subscriber::EnvFilter;

mod import;
mod repl;
mod repl_commands;

/// SupplyGraph - an incremental supply-chain graph with shortest-path queries
#[derive(Parser, Debug)]
#[command(name = "supplygraph")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "SUPPLYGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// CSV edge list to load before the first prompt
    #[arg(short, long, env = "SUPPLYGRAPH_IMPORT")]
    import: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SupplyConfig::load_from(path),
        None => SupplyConfig::load(),
    }
    .context("configuration is invalid")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with_target(false)
        .init();

    tracing::debug!(?config, "configuration loaded");

    let mut store = FlowStore::new();
    if let Some(path) = &args.import {
        let summary = import::load_csv(&mut store, path)
            .with_context(|| format!("failed to import {}", path.display()))?;
        println!(
            "Imported {} entities and {} flows ({} rows skipped).",
            summary.entities_added, summary.flows_added, summary.rows_skipped
        );
    }

    repl::run(&mut store, &config)
}
