//! Townland - address to coordinate lookup against the Irish placenames gazetteer
//!
//! This library provides the tokenizer, the progressive matcher and the
//! reference tables shared by the `serve` and `geocode` binaries.

pub mod config;
pub mod error;
pub mod gazetteer;
pub mod matcher;
pub mod models;
pub mod tokenizer;

pub use error::GazetteerError;
pub use gazetteer::Gazetteer;
pub use matcher::{geocode, match_tokens};
pub use models::{CountyRecord, MatchLevel, MatchRecord, MatchResult, PlaceRecord};
pub use tokenizer::{tokenize, Token};

/// Install the fmt subscriber used by both binaries. `RUST_LOG` overrides
/// the default `info` filter.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
