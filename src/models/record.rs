//! Reference table rows.

/// A named local place (townland) within a county.
///
/// Coordinates are carried exactly as they appear in the source file so that
/// no precision is lost on the way back out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceRecord {
    pub county: String,
    pub name: String,
    pub y: String,
    pub x: String,
}

impl PlaceRecord {
    pub fn new(
        county: impl Into<String>,
        name: impl Into<String>,
        y: impl Into<String>,
        x: impl Into<String>,
    ) -> Self {
        Self {
            county: county.into(),
            name: name.into(),
            y: y.into(),
            x: x.into(),
        }
    }
}

/// Centroid of a county
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyRecord {
    pub county: String,
    pub y: String,
    pub x: String,
}

impl CountyRecord {
    pub fn new(county: impl Into<String>, y: impl Into<String>, x: impl Into<String>) -> Self {
        Self {
            county: county.into(),
            y: y.into(),
            x: x.into(),
        }
    }
}
