//! Reference tables for address lookup.
//!
//! Places and counties are loaded once from CSV and held immutable for the
//! life of the process, together with lookup indexes built at load time.

mod index;
mod loader;

pub use index::Gazetteer;
pub use loader::{load_counties, load_places};
