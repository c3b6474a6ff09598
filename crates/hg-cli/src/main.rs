//! Hourglass CLI
//!
//! - `hourglass price` - Black-Scholes price and greeks of a European option
//! - `hourglass cost <price>` - what a purchase costs in hours of work

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;

use commands::{cost::CostArgs, price::PriceArgs};
use config::{HourglassConfig, CONFIG_ENV};

#[derive(Parser)]
#[command(name = "hourglass")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (JSON)
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option and its greeks
    Price(PriceArgs),

    /// Express a purchase price as working time
    Cost(CostArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!("Configuration path: {:?}", cli.config);

    let config = HourglassConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?;

    match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config).context("pricing failed")?,
        Commands::Cost(args) => commands::cost::run(args, &config).context("cost calculation failed")?,
    }
    Ok(())
}
