use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PLACES: &str = "Townlands__OSi_National_Placenames_Gazetteer.csv";
pub const DEFAULT_COUNTIES: &str = "Counties__OSi_National_Placenames_Gazetteer.csv";
pub const DEFAULT_LISTEN: &str = "127.0.0.1:5000";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub datasets: DatasetConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatasetConfig {
    pub places: PathBuf,
    pub counties: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            places: PathBuf::from(DEFAULT_PLACES),
            counties: PathBuf::from(DEFAULT_COUNTIES),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Config file if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command line overrides on top of the file values
    pub fn with_overrides(
        mut self,
        places: Option<PathBuf>,
        counties: Option<PathBuf>,
        listen: Option<String>,
    ) -> Self {
        if let Some(places) = places {
            self.datasets.places = places;
        }
        if let Some(counties) = counties {
            self.datasets.counties = counties;
        }
        if let Some(listen) = listen {
            self.server.listen = listen;
        }
        self
    }
}
