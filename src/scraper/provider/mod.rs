pub mod catalog;
pub mod mediagraph;

mod http;
mod traits;

pub use catalog::{CATALOG_API_URL, CatalogPage, CatalogProvider, Pagination};
pub use http::HttpClient;
pub use mediagraph::{MEDIAGRAPH_API_URL, MediaGraphProvider};
pub use traits::{CatalogSource, MediaGraphSource};
