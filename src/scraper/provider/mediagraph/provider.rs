use std::time::Duration;

use async_trait::async_trait;

use super::api_types::{GraphQLResponse, Media, MediaData};
use crate::scraper::{
    Result, ScraperError,
    provider::{HttpClient, traits::MediaGraphSource},
    types::{MediaGraphMedia, MediaGraphResult, MediaKind, Season},
};

pub const MEDIAGRAPH_API_URL: &str = "https://graphql.anilist.co";

const LOOKUP_QUERY: &str = r#"
    query ($idMal: Int, $type: MediaType) {
        Media(idMal: $idMal, type: $type) {
            id
            title { romaji english native }
            season
            seasonYear
            genres
            tags { name }
            studios { edges { node { name } } }
        }
    }
"#;

/// GraphQL client for the media-graph source, joined to the catalog by
/// the catalog's numeric ID.
pub struct MediaGraphProvider {
    client: HttpClient,
}

impl MediaGraphProvider {
    pub fn new(base_url: &str, min_interval: Duration) -> Self {
        Self {
            client: HttpClient::new(base_url, min_interval),
        }
    }
}

#[async_trait]
impl MediaGraphSource for MediaGraphProvider {
    /// Look up a title by its catalog ID.
    ///
    /// GraphQL-level errors (unknown ID, validation failures) are a
    /// normal outcome and fold into [`MediaGraphResult::Missing`]; only
    /// transport failures surface as errors.
    async fn lookup(&self, kind: MediaKind, catalog_id: u64) -> Result<MediaGraphResult> {
        let body = serde_json::json!({
            "query": LOOKUP_QUERY,
            "variables": { "idMal": catalog_id, "type": kind.graphql_type() },
        });

        let response: GraphQLResponse<MediaData> = match self.client.post_json("", &body).await {
            Ok(response) => response,
            // The source reports lookup failures with an error status and
            // a JSON error payload; that is Missing, not a failure of
            // this run.
            Err(ScraperError::Api { status, message }) => {
                return Ok(MediaGraphResult::Missing(format!("HTTP {status}: {message}")));
            }
            Err(err) => return Err(err),
        };

        if let Some(errors) = response.errors
            && let Some(error) = errors.first()
        {
            return Ok(MediaGraphResult::Missing(error.message.clone()));
        }

        let media = response.data.and_then(|data| data.media);

        Ok(match media {
            Some(media) => MediaGraphResult::Found(convert(media)),
            None => MediaGraphResult::Missing("no media in response".to_string()),
        })
    }
}

fn convert(media: Media) -> MediaGraphMedia {
    MediaGraphMedia {
        id: media.id,
        english_title: media.title.english,
        romaji_title: media.title.romaji,
        native_title: media.title.native,
        season: media.season.as_deref().and_then(Season::parse),
        season_year: media.season_year,
        genres: media.genres.unwrap_or_default(),
        tags: media
            .tags
            .unwrap_or_default()
            .into_iter()
            .map(|tag| tag.name)
            .collect(),
        studios: media
            .studios
            .map(|studios| {
                studios
                    .edges
                    .into_iter()
                    .map(|edge| edge.node.name)
                    .collect()
            })
            .unwrap_or_default(),
    }
}
