//! Command line geocoding.
//!
//! Geocodes a single address, or a whole CSV of addresses in parallel and
//! reports how many resolved at each level.

mod batch;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use townland::config::Config;
use townland::{geocode, Gazetteer};

use crate::batch::{geocode_all, read_addresses, write_results, BatchStats};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "geocode")]
#[command(about = "Geocode Irish addresses against the placenames gazetteer")]
struct Args {
    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Townlands CSV (overrides config)
    #[arg(long)]
    places: Option<PathBuf>,

    /// Counties CSV (overrides config)
    #[arg(long)]
    counties: Option<PathBuf>,

    /// Single address to geocode; prints the JSON result
    #[arg(short, long, conflicts_with = "input", required_unless_present = "input")]
    address: Option<String>,

    /// CSV file of addresses to geocode in batch
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Address column in the input CSV
    #[arg(long, default_value = "address")]
    column: String,

    /// Write one result row per address to this CSV
    #[arg(short, long, requires = "input")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    townland::init_logging()?;

    let args = Args::parse();
    let config = Config::load_or_default(args.config.as_deref())?.with_overrides(
        args.places,
        args.counties,
        None,
    );

    let gazetteer = Gazetteer::load(&config.datasets.places, &config.datasets.counties)
        .context("Failed to load gazetteer")?;

    if let Some(address) = args.address {
        let result = geocode(&address, &gazetteer);
        println!("{}", serde_json::to_string_pretty(&result.records)?);
        return Ok(());
    }

    let Some(input) = args.input else {
        anyhow::bail!("either --address or --input is required");
    };

    let addresses = read_addresses(&input, &args.column)?;
    info!("Geocoding {} addresses from {}", addresses.len(), input.display());

    let start = Instant::now();
    let results = geocode_all(&addresses, &gazetteer)?;
    let elapsed = start.elapsed();

    let stats = BatchStats::collect(&results, elapsed);
    stats.log();

    if let Some(output) = args.output {
        write_results(&output, &addresses, &results)?;
        info!("Results written to {}", output.display());
    }

    Ok(())
}
