use async_trait::async_trait;

use crate::scraper::{
    Result,
    provider::catalog::CatalogPage,
    types::{MediaGraphResult, MediaKind},
};

/// Seam between the runner and the catalog listing endpoint.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of the title listing.
    async fn fetch_page(&self, kind: MediaKind, page: u32) -> Result<CatalogPage>;
}

/// Seam between the runner and the media-graph lookup endpoint.
#[async_trait]
pub trait MediaGraphSource: Send + Sync {
    /// Look up a title by its catalog ID.
    async fn lookup(&self, kind: MediaKind, catalog_id: u64) -> Result<MediaGraphResult>;
}
