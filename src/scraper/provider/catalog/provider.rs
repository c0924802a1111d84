use std::time::Duration;

use async_trait::async_trait;

use super::api_types::CatalogPage;
use crate::scraper::{
    Result, ScraperError,
    provider::{HttpClient, traits::CatalogSource},
    types::MediaKind,
};

pub const CATALOG_API_URL: &str = "https://api.jikan.moe/v4";

// Listing is ordered newest-ID-first so a fresh scrape sees new titles
// before old ones.
const ORDER_BY: &str = "mal_id";
const SORT: &str = "desc";

/// REST client for the catalog source.
pub struct CatalogProvider {
    client: HttpClient,
}

impl CatalogProvider {
    pub fn new(base_url: &str, min_interval: Duration) -> Self {
        Self {
            client: HttpClient::new(base_url, min_interval),
        }
    }
}

#[async_trait]
impl CatalogSource for CatalogProvider {
    /// Fetch one page of the title listing.
    ///
    /// The upstream rate limiter occasionally answers with a timeout; one
    /// retry covers that before the error propagates.
    async fn fetch_page(&self, kind: MediaKind, page: u32) -> Result<CatalogPage> {
        let endpoint = format!("/{}", kind.catalog_path());
        let page_param = page.to_string();
        let params = [
            ("page", page_param.as_str()),
            ("order_by", ORDER_BY),
            ("sort", SORT),
        ];

        match self.client.get_with_params(&endpoint, &params).await {
            Err(err) if is_timeout(&err) => self.client.get_with_params(&endpoint, &params).await,
            other => other,
        }
    }
}

fn is_timeout(err: &ScraperError) -> bool {
    match err {
        ScraperError::Network(err) => err.is_timeout(),
        ScraperError::Api { status, .. } => *status == 408,
        _ => false,
    }
}
