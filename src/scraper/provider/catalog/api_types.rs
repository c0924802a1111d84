use serde::Deserialize;
use serde_json::Value;

/// One page of the catalog listing endpoint.
///
/// Entries stay as raw JSON here; binding them to
/// [`crate::scraper::CatalogRecord`] is a separate fallible step.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    pub pagination: Pagination,
    pub data: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub has_next_page: bool,
}
