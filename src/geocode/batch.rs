//! Batch geocoding over a CSV of addresses.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::info;

use townland::{geocode, Gazetteer, MatchLevel, MatchResult};

/// Read the address column from a CSV with headers.
///
/// The column name is matched case-insensitively; a single-column file uses
/// its only column whatever the header says.
pub fn read_addresses(path: &Path, column: &str) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open address file: {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let idx = if headers.len() == 1 {
        0
    } else {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(column))
            .with_context(|| format!("Column '{}' not found", column))?
    };

    let mut addresses = Vec::new();
    for result in reader.records() {
        let record = result?;
        addresses.push(record.get(idx).unwrap_or_default().to_string());
    }
    Ok(addresses)
}

/// Geocode every address in parallel, keeping input order
pub fn geocode_all(addresses: &[String], gazetteer: &Gazetteer) -> Result<Vec<MatchResult>> {
    let pb = ProgressBar::new(addresses.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})",
            )?
            .progress_chars("#>-"),
    );

    let results: Vec<MatchResult> = addresses
        .par_iter()
        .map(|address| {
            let result = geocode(address, gazetteer);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();
    Ok(results)
}

/// Per-level counts and throughput for a batch run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStats {
    pub total: usize,
    pub place_level: usize,
    pub county_level: usize,
    pub empty: usize,
    pub elapsed: Duration,
}

impl BatchStats {
    pub fn collect(results: &[MatchResult], elapsed: Duration) -> Self {
        let count = |level| results.iter().filter(|r| r.level == level).count();
        Self {
            total: results.len(),
            place_level: count(MatchLevel::Place),
            county_level: count(MatchLevel::County),
            empty: count(MatchLevel::None),
            elapsed,
        }
    }

    pub fn per_address(&self) -> Duration {
        if self.total == 0 {
            Duration::ZERO
        } else {
            self.elapsed.div_f64(self.total as f64)
        }
    }

    pub fn per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.total as f64 / secs
        }
    }

    pub fn log(&self) {
        info!(
            "Total addresses: {}, place level: {}, county level: {}, empty: {}",
            self.total, self.place_level, self.county_level, self.empty
        );
        info!(
            "Total time: {:.4}s, time per address: {:.4}s, {:.4} addresses/s",
            self.elapsed.as_secs_f64(),
            self.per_address().as_secs_f64(),
            self.per_second()
        );
    }
}

/// One row per address with its most local record
pub fn write_results(path: &Path, addresses: &[String], results: &[MatchResult]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    writer.write_record(["Address", "Level", "Matches", "County", "English_Name", "Y", "X"])?;
    for (address, result) in addresses.iter().zip(results) {
        let level = result.level.to_string();
        let matches = result.len().to_string();
        match result.first() {
            Some(record) => writer.write_record([
                address.as_str(),
                level.as_str(),
                matches.as_str(),
                record.county.as_str(),
                record.name.as_deref().unwrap_or(""),
                record.y.as_str(),
                record.x.as_str(),
            ])?,
            None => writer.write_record([
                address.as_str(),
                level.as_str(),
                matches.as_str(),
                "",
                "",
                "",
                "",
            ])?,
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;
    use townland::{CountyRecord, PlaceRecord};

    fn gazetteer() -> Gazetteer {
        Gazetteer::new(
            vec![PlaceRecord::new("CARLOW", "JOHNSTOWN", "52.82", "-6.86")],
            vec![CountyRecord::new("CARLOW", "52.72", "-6.83")],
        )
    }

    fn addresses() -> Vec<String> {
        [
            "Johnstown, Bennekerry, Co Carlow",
            "Main Street, Carlow",
            "Nowhere, Atlantis",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_geocode_all_keeps_order_and_counts_levels() {
        let results = geocode_all(&addresses(), &gazetteer()).unwrap();
        let levels: Vec<MatchLevel> = results.iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![MatchLevel::Place, MatchLevel::County, MatchLevel::None]
        );

        let stats = BatchStats::collect(&results, Duration::from_secs(3));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.place_level, 1);
        assert_eq!(stats.county_level, 1);
        assert_eq!(stats.empty, 1);
        assert_eq!(stats.per_address(), Duration::from_secs(1));
        assert_eq!(stats.per_second(), 1.0);
    }

    #[test]
    fn test_stats_for_empty_batch() {
        let stats = BatchStats::collect(&[], Duration::ZERO);
        assert_eq!(stats.per_address(), Duration::ZERO);
        assert_eq!(stats.per_second(), 0.0);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_per_address_beyond_u32_total() {
        let total = u32::MAX as usize + 1;
        let stats = BatchStats {
            total,
            place_level: total,
            county_level: 0,
            empty: 0,
            elapsed: Duration::from_secs(total as u64),
        };
        assert_eq!(stats.per_address(), Duration::from_secs(1));
    }

    #[test]
    fn test_read_addresses_by_column() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"id,Address\n1,\"Johnstown, Co Carlow\"\n2,Carlow\n")
            .unwrap();
        let addresses = read_addresses(file.path(), "address").unwrap();
        assert_eq!(addresses, vec!["Johnstown, Co Carlow", "Carlow"]);
    }

    #[test]
    fn test_read_addresses_single_column() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"full_address\n\"Bennekerry, Carlow\"\n").unwrap();
        let addresses = read_addresses(file.path(), "address").unwrap();
        assert_eq!(addresses, vec!["Bennekerry, Carlow"]);
    }

    #[test]
    fn test_write_results() {
        let addresses = addresses();
        let results = geocode_all(&addresses, &gazetteer()).unwrap();
        let file = Builder::new().suffix(".csv").tempfile().unwrap();
        write_results(file.path(), &addresses, &results).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "Address,Level,Matches,County,English_Name,Y,X");
        assert_eq!(
            lines[1],
            "\"Johnstown, Bennekerry, Co Carlow\",place,1,CARLOW,JOHNSTOWN,52.82,-6.86"
        );
        assert_eq!(lines[2], "\"Main Street, Carlow\",county,1,CARLOW,,52.72,-6.83");
        assert_eq!(lines[3], "\"Nowhere, Atlantis\",none,0,,,,");
    }
}
