mod organizer;
mod provider;
mod reconcile;
mod runner;
mod store;
mod types;


pub use organizer::{OrganizerConfig, SeasonOrganizer};
pub use provider::{
    CATALOG_API_URL, CatalogPage, CatalogProvider, CatalogSource, HttpClient, MEDIAGRAPH_API_URL,
    MediaGraphProvider, MediaGraphSource, Pagination,
};
pub use reconcile::{date_to_season, parse_airing_range, reconcile};
pub use runner::{RunOptions, RunSummary, Runner, ScrapeMode};
pub use store::{MetadataStore, WriteOutcome};
pub use types::{
    AiringRange, CanonicalRecord, CatalogRecord, Category, CountField, MediaGraphMedia,
    MediaGraphResult, MediaKind, NameList, Season, SeasonSlot,
};

/// Scraper result type
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Scraper error types
#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Catalog record is missing required field: {key}")]
    MissingField { key: &'static str },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
