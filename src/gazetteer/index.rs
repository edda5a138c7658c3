//! In-memory gazetteer with (county, name) indexes.

use std::path::Path;

use hashbrown::HashMap;
use tracing::info;

use super::loader::{load_counties, load_places};
use crate::error::Result;
use crate::models::{CountyRecord, PlaceRecord};

/// Both reference tables plus their lookup indexes.
///
/// Index entries are row positions pushed in table order, so a lookup yields
/// exactly what a front-to-back scan of the table would.
#[derive(Debug)]
pub struct Gazetteer {
    places: Vec<PlaceRecord>,
    counties: Vec<CountyRecord>,
    /// county -> name -> rows in `places`
    place_index: HashMap<String, HashMap<String, Vec<usize>>>,
    /// county -> rows in `counties`
    county_index: HashMap<String, Vec<usize>>,
}

impl Gazetteer {
    /// Build a gazetteer from already-loaded tables
    pub fn new(places: Vec<PlaceRecord>, counties: Vec<CountyRecord>) -> Self {
        let mut place_index: HashMap<String, HashMap<String, Vec<usize>>> = HashMap::new();
        for (row, place) in places.iter().enumerate() {
            place_index
                .entry(place.county.to_uppercase())
                .or_default()
                .entry(place.name.to_uppercase())
                .or_default()
                .push(row);
        }

        let mut county_index: HashMap<String, Vec<usize>> = HashMap::new();
        for (row, county) in counties.iter().enumerate() {
            county_index
                .entry(county.county.to_uppercase())
                .or_default()
                .push(row);
        }

        info!(
            "Gazetteer ready: {} places across {} counties, {} county centroids",
            places.len(),
            place_index.len(),
            counties.len()
        );

        Self {
            places,
            counties,
            place_index,
            county_index,
        }
    }

    /// Load both tables from CSV files.
    ///
    /// Any failure aborts the whole load; a partially populated gazetteer is
    /// never returned.
    pub fn load(places_path: &Path, counties_path: &Path) -> Result<Self> {
        let places = load_places(places_path)?;
        let counties = load_counties(counties_path)?;
        Ok(Self::new(places, counties))
    }

    /// All places called `name` in `county`. Both keys must already be upper-cased.
    pub fn places_in<'a>(
        &'a self,
        county: &str,
        name: &str,
    ) -> impl Iterator<Item = &'a PlaceRecord> + 'a {
        self.place_index
            .get(county)
            .and_then(|names| names.get(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&row| &self.places[row])
    }

    /// Centroid rows for `county` (upper-cased key)
    pub fn county<'a>(&'a self, county: &str) -> impl Iterator<Item = &'a CountyRecord> + 'a {
        self.county_index
            .get(county)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&row| &self.counties[row])
    }
}
