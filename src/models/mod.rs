//! Core data models for the gazetteer.

pub mod matched;
pub mod record;

pub use matched::{MatchLevel, MatchRecord, MatchResult};
pub use record::{CountyRecord, PlaceRecord};
