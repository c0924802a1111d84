mod api_types;
mod provider;

pub use provider::{MEDIAGRAPH_API_URL, MediaGraphProvider};
