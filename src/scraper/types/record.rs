use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Broadcast season quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Case-insensitive parse of a season word ("Spring", "SPRING").
    pub fn parse(word: &str) -> Option<Self> {
        match word.trim().to_ascii_lowercase().as_str() {
            "winter" => Some(Self::Winter),
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "fall" => Some(Self::Fall),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winter => write!(f, "WINTER"),
            Self::Spring => write!(f, "SPRING"),
            Self::Summer => write!(f, "SUMMER"),
            Self::Fall => write!(f, "FALL"),
        }
    }
}

/// First and last broadcast dates, when known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiringRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Season and year a title premiered in; each slot may be unknown
/// independently of the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSlot {
    pub season: Option<Season>,
    pub year: Option<i32>,
}

/// Genre/tag classification of a title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub demographic: String,
    pub theme: String,
    pub genres: BTreeSet<String>,
    pub tags: BTreeSet<String>,
}

/// The reconciled metadata document persisted per title.
///
/// Title and genre collections are ordered sets, so serializing the same
/// reconciliation twice yields byte-identical documents. The catalog ID
/// doubles as the on-disk filename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    pub catalog_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_graph_id: Option<String>,
    pub title: String,
    pub english_titles: BTreeSet<String>,
    pub native_titles: BTreeSet<String>,
    pub media_type: String,
    pub episode_count: u32,
    pub status: String,
    pub airing_range: AiringRange,
    pub season: SeasonSlot,
    pub category: Category,
    pub source: String,
    pub licensors: Vec<String>,
    pub studios: Vec<String>,
    pub rating: String,
}
