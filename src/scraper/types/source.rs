use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scraper::{Result, ScraperError, types::Season};

/// Media classes served by both sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Anime,
    Manga,
}

impl MediaKind {
    /// Path segment on the catalog API.
    pub fn catalog_path(self) -> &'static str {
        match self {
            Self::Anime => "anime",
            Self::Manga => "manga",
        }
    }

    /// Media type name on the media-graph API.
    pub fn graphql_type(self) -> &'static str {
        match self {
            Self::Anime => "ANIME",
            Self::Manga => "MANGA",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.catalog_path())
    }
}

/// A field the catalog emits either as a number or as free text
/// ("Unknown").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountField {
    Number(i64),
    Text(String),
}

impl CountField {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Text(n.to_string()), Self::Number),
            Value::String(s) => Self::Text(s.clone()),
            // The catalog emits null for titles still airing.
            Value::Null => Self::Text(String::new()),
            other => Self::Text(other.to_string()),
        }
    }

    /// Non-negative count; unparseable input collapses to zero.
    pub fn to_count(&self) -> u32 {
        match self {
            Self::Number(n) => u32::try_from(*n).unwrap_or(0),
            Self::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }
}

/// A field the catalog emits either as one name or as a list of names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameList {
    One(String),
    Many(Vec<String>),
}

impl NameList {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self::Many(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            ),
            Value::String(s) => Self::One(s.clone()),
            Value::Null => Self::Many(Vec::new()),
            other => Self::One(other.to_string()),
        }
    }
}

/// One raw title record from the catalog source.
///
/// The catalog payload is loosely structured; binding it here is the
/// boundary where a missing required key becomes a typed fatal error.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    pub id: u64,
    pub title: String,
    pub media_type: String,
    pub episodes: CountField,
    pub status: String,
    pub aired: String,
    pub genres: Vec<String>,
    pub source: String,
    pub licensors: NameList,
    pub rating: String,
    pub synonyms: Vec<String>,
    pub english: Vec<String>,
    pub japanese: Vec<String>,
    pub demographic: String,
    pub theme: String,
    pub studios: Vec<String>,
    pub premiered: Option<String>,
}

impl CatalogRecord {
    /// Bind a raw catalog payload.
    ///
    /// Missing required keys are a contract violation by the upstream
    /// source and surface as [`ScraperError::MissingField`]; optional
    /// keys default.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| ScraperError::Parse("catalog record is not a JSON object".to_string()))?;

        Ok(Self {
            id: require(obj, "id")?
                .as_u64()
                .ok_or_else(|| ScraperError::Parse("catalog id is not numeric".to_string()))?,
            title: require_str(obj, "title")?,
            media_type: require_str(obj, "type")?,
            episodes: CountField::from_value(require(obj, "episodes")?),
            status: require_str(obj, "status")?,
            aired: require_str(obj, "aired")?,
            genres: string_list(require(obj, "genres")?),
            source: require_str(obj, "source")?,
            licensors: NameList::from_value(require(obj, "licensors")?),
            rating: require_str(obj, "rating")?,
            synonyms: optional_list(obj, "synonyms"),
            english: optional_list(obj, "english"),
            japanese: optional_list(obj, "japanese"),
            demographic: optional_str(obj, "demographic"),
            theme: optional_str(obj, "theme"),
            studios: optional_list(obj, "studios"),
            premiered: obj
                .get("premiered")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}

fn require<'a>(obj: &'a serde_json::Map<String, Value>, key: &'static str) -> Result<&'a Value> {
    obj.get(key).ok_or(ScraperError::MissingField { key })
}

fn require_str(obj: &serde_json::Map<String, Value>, key: &'static str) -> Result<String> {
    require(obj, key)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ScraperError::Parse(format!("catalog field {key} is not a string")))
}

fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn optional_list(obj: &serde_json::Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key).map(string_list).unwrap_or_default()
}

fn optional_str(obj: &serde_json::Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Media-graph lookup outcome, folded from the GraphQL response envelope
/// at the provider boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaGraphResult {
    /// A usable media object came back.
    Found(MediaGraphMedia),
    /// The source answered, but without a usable record (unknown ID,
    /// error payload).
    Missing(String),
}

/// The media object the media-graph source returns for a title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaGraphMedia {
    pub id: u64,
    pub english_title: Option<String>,
    pub romaji_title: Option<String>,
    pub native_title: Option<String>,
    pub season: Option<Season>,
    pub season_year: Option<i32>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub studios: Vec<String>,
}
