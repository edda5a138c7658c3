//! Lookup results.

use serde::Serialize;

use super::{CountyRecord, PlaceRecord};

/// Level at which a lookup was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchLevel {
    /// A place name and its county both matched
    Place,
    /// Only the county matched
    County,
    /// Nothing matched
    None,
}

impl std::fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchLevel::Place => write!(f, "place"),
            MatchLevel::County => write!(f, "county"),
            MatchLevel::None => write!(f, "none"),
        }
    }
}

/// One coordinate pair returned to the caller.
///
/// Serializes to the `County`/`English_Name`/`Y`/`X` shape of the source
/// tables. `English_Name` is omitted for county-level matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    #[serde(rename = "County")]
    pub county: String,
    #[serde(rename = "English_Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Y")]
    pub y: String,
    #[serde(rename = "X")]
    pub x: String,
}

impl From<&PlaceRecord> for MatchRecord {
    fn from(place: &PlaceRecord) -> Self {
        Self {
            county: place.county.clone(),
            name: Some(place.name.clone()),
            y: place.y.clone(),
            x: place.x.clone(),
        }
    }
}

impl From<&CountyRecord> for MatchRecord {
    fn from(county: &CountyRecord) -> Self {
        Self {
            county: county.county.clone(),
            name: None,
            y: county.y.clone(),
            x: county.x.clone(),
        }
    }
}

/// Outcome of a progressive match: every record found at the most specific
/// level reached, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub level: MatchLevel,
    pub records: Vec<MatchRecord>,
}

impl MatchResult {
    pub fn empty() -> Self {
        Self {
            level: MatchLevel::None,
            records: Vec::new(),
        }
    }

    pub fn places<'a>(places: impl IntoIterator<Item = &'a PlaceRecord>) -> Self {
        Self::at_level(MatchLevel::Place, places.into_iter().map(MatchRecord::from))
    }

    pub fn counties<'a>(counties: impl IntoIterator<Item = &'a CountyRecord>) -> Self {
        Self::at_level(
            MatchLevel::County,
            counties.into_iter().map(MatchRecord::from),
        )
    }

    fn at_level(level: MatchLevel, records: impl Iterator<Item = MatchRecord>) -> Self {
        let records: Vec<MatchRecord> = records.collect();
        if records.is_empty() {
            Self::empty()
        } else {
            Self { level, records }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The most local record, if any
    pub fn first(&self) -> Option<&MatchRecord> {
        self.records.first()
    }
}
