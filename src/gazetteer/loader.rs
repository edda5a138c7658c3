//! CSV loading for the place and county tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use tracing::info;

use crate::error::{GazetteerError, Result};
use crate::models::{CountyRecord, PlaceRecord};

/// Load the townland table (`County`, `English_Name`, `Y`, `X`)
pub fn load_places(path: &Path) -> Result<Vec<PlaceRecord>> {
    info!("Loading places from {}", path.display());

    let mut table = Table::open(path)?;
    let county = table.column("County")?;
    let name = table.column("English_Name")?;
    let y = table.column("Y")?;
    let x = table.column("X")?;

    let mut places = Vec::new();
    for result in table.reader.records() {
        let record = result.map_err(|source| csv_error(table.path, source))?;
        places.push(PlaceRecord {
            county: key(table.path, &record, county)?,
            name: key(table.path, &record, name)?,
            y: record[y.index].to_string(),
            x: record[x.index].to_string(),
        });
    }

    info!("Loaded {} places", places.len());
    Ok(places)
}

/// Load the county centroid table (`County`, `Y`, `X`)
pub fn load_counties(path: &Path) -> Result<Vec<CountyRecord>> {
    info!("Loading counties from {}", path.display());

    let mut table = Table::open(path)?;
    let county = table.column("County")?;
    let y = table.column("Y")?;
    let x = table.column("X")?;

    let mut counties = Vec::new();
    for result in table.reader.records() {
        let record = result.map_err(|source| csv_error(table.path, source))?;
        counties.push(CountyRecord {
            county: key(table.path, &record, county)?,
            y: record[y.index].to_string(),
            x: record[x.index].to_string(),
        });
    }

    info!("Loaded {} counties", counties.len());
    Ok(counties)
}

#[derive(Clone, Copy)]
struct Column {
    name: &'static str,
    index: usize,
}

struct Table<'p> {
    path: &'p Path,
    headers: StringRecord,
    reader: csv::Reader<Box<dyn Read>>,
}

impl<'p> Table<'p> {
    fn open(path: &'p Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| GazetteerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let input: Box<dyn Read> = if path.extension().map_or(false, |e| e == "gz") {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
        let headers = reader
            .headers()
            .map_err(|source| GazetteerError::Csv {
                path: path.to_path_buf(),
                source,
            })?
            .clone();

        Ok(Self {
            path,
            headers,
            reader,
        })
    }

    fn column(&self, name: &'static str) -> Result<Column> {
        let index = self
            .headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}') == name)
            .ok_or_else(|| GazetteerError::MissingColumn {
                path: self.path.to_path_buf(),
                column: name,
            })?;
        Ok(Column { name, index })
    }
}

/// A matching key column; blank values are rejected so that no reference key
/// is ever empty.
fn key(path: &Path, record: &StringRecord, column: Column) -> Result<String> {
    let value = &record[column.index];
    if value.trim().is_empty() {
        return Err(GazetteerError::MissingField {
            path: path.to_path_buf(),
            column: column.name,
            line: record.position().map_or(0, |p| p.line()),
        });
    }
    Ok(value.to_string())
}

fn csv_error(path: &Path, source: csv::Error) -> GazetteerError {
    GazetteerError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
