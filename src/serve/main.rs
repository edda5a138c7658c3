//! HTTP lookup server.
//!
//! Loads the gazetteer once at startup and serves address lookups from it
//! for the rest of the process lifetime.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use townland::config::Config;
use townland::Gazetteer;

mod routes;
use routes::{router, AppState, LOOKUP_PATH};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "serve")]
#[command(about = "Address geocoding server")]
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

    /// Listen address (overrides config)
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    townland::init_logging()?;

    let args = Args::parse();
    let config = Config::load_or_default(args.config.as_deref())?.with_overrides(
        args.places,
        args.counties,
        args.listen,
    );

    info!("Townland Geocoder Server");

    let gazetteer = Gazetteer::load(&config.datasets.places, &config.datasets.counties)
        .context("Failed to load gazetteer")?;

    let state = Arc::new(AppState { gazetteer });
    let app = router(state);

    info!("Starting server on {}", config.server.listen);
    info!("Lookups at http://{}{}?address={{address}}", config.server.listen, LOOKUP_PATH);

    let listener = tokio::net::TcpListener::bind(&config.server.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.listen))?;
    axum::serve(listener, app).await?;

    Ok(())
}
