use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::scraper::{CATALOG_API_URL, MEDIAGRAPH_API_URL};

/// Application configuration, layered from defaults, an optional
/// `kisetsu.toml` next to the working directory, and `KISETSU_*`
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory receiving the `{id}.json` corpus.
    pub data_dir: PathBuf,
    /// Path of the season index file.
    pub season_index: PathBuf,
    /// Page cap for incremental scrape runs.
    pub page_limit: u32,
    /// Minimum seconds between requests to either source.
    pub request_interval_secs: u64,
    pub catalog_url: String,
    pub mediagraph_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kisetsu");

        Self {
            data_dir: base.join("db"),
            season_index: base.join("season_index.json"),
            page_limit: 5,
            request_interval_secs: 4,
            catalog_url: CATALOG_API_URL.to_string(),
            mediagraph_url: MEDIAGRAPH_API_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load the layered configuration.
    pub fn load() -> anyhow::Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name("kisetsu").required(false))
            .add_source(Environment::with_prefix("KISETSU"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    #[must_use]
    pub fn request_interval(&self) -> Duration {
        Duration::from_secs(self.request_interval_secs)
    }
}
