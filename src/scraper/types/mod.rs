mod record;
mod source;

pub use record::{AiringRange, CanonicalRecord, Category, Season, SeasonSlot};
pub use source::{CatalogRecord, CountField, MediaGraphMedia, MediaGraphResult, MediaKind, NameList};
