mod dates;
mod season;

pub use dates::parse_airing_range;
pub use season::date_to_season;

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::scraper::types::{
    CanonicalRecord, CatalogRecord, Category, MediaGraphMedia, MediaGraphResult, NameList, Season,
    SeasonSlot,
};

/// Merge one catalog record and one media-graph lookup into the
/// canonical document for the title.
///
/// The media-graph side is optional: a [`MediaGraphResult::Missing`]
/// lookup falls back to the catalog-only mapping. Every field of the
/// result is populated; malformed dates and counts degrade to their
/// documented defaults instead of failing the title. Pure function of
/// its two inputs.
pub fn reconcile(catalog: &CatalogRecord, mediagraph: &MediaGraphResult) -> CanonicalRecord {
    let media = match mediagraph {
        MediaGraphResult::Found(media) => Some(media),
        MediaGraphResult::Missing(_) => None,
    };

    let airing_range = parse_airing_range(&catalog.aired);

    let mut english_titles: BTreeSet<String> = catalog
        .english
        .iter()
        .chain(&catalog.synonyms)
        .cloned()
        .collect();
    let mut native_titles: BTreeSet<String> = catalog.japanese.iter().cloned().collect();
    let mut genres: BTreeSet<String> = catalog.genres.iter().cloned().collect();
    let mut tags = BTreeSet::new();
    let mut studios = catalog.studios.clone();

    if let Some(media) = media {
        english_titles.extend(media.english_title.iter().cloned());
        english_titles.extend(media.romaji_title.iter().cloned());
        native_titles.extend(media.native_title.iter().cloned());
        genres.extend(media.genres.iter().cloned());
        tags.extend(media.tags.iter().cloned());
        studios.extend(media.studios.iter().cloned());
    }

    let season = match media {
        Some(media) => explicit_or_derived(media, airing_range.start),
        None => premiered_or_derived(catalog.premiered.as_deref(), airing_range.start),
    };

    CanonicalRecord {
        catalog_id: catalog.id,
        media_graph_id: media.map(|m| m.id.to_string()),
        title: catalog.title.clone(),
        english_titles,
        native_titles,
        media_type: catalog.media_type.clone(),
        episode_count: catalog.episodes.to_count(),
        status: catalog.status.clone(),
        airing_range,
        season,
        category: Category {
            demographic: catalog.demographic.clone(),
            theme: catalog.theme.clone(),
            genres,
            tags,
        },
        source: catalog.source.clone(),
        licensors: licensor_list(&catalog.licensors),
        studios,
        rating: catalog.rating.clone(),
    }
}

/// Prefer the media-graph's explicit season and year; when either is
/// unknown and an airing start exists, derive both from it. With no
/// start date, whatever the source did supply is kept.
fn explicit_or_derived(media: &MediaGraphMedia, start: Option<NaiveDate>) -> SeasonSlot {
    let slot = SeasonSlot {
        season: media.season,
        year: media.season_year,
    };

    if (slot.season.is_none() || slot.year.is_none())
        && let Some(start) = start
    {
        return derived(start);
    }

    slot
}

/// Catalog-only fallback: a well-formed "premiered" string
/// ("<Season> <Year>") wins, then derivation from the airing start, then
/// nothing.
fn premiered_or_derived(premiered: Option<&str>, start: Option<NaiveDate>) -> SeasonSlot {
    if let Some(slot) = premiered.and_then(parse_premiered) {
        return slot;
    }

    start.map_or_else(SeasonSlot::default, derived)
}

fn parse_premiered(premiered: &str) -> Option<SeasonSlot> {
    let (word, year) = premiered.trim().split_once(' ')?;
    let season = Season::parse(word)?;
    let year = year.trim().parse().ok()?;

    Some(SeasonSlot {
        season: Some(season),
        year: Some(year),
    })
}

fn derived(start: NaiveDate) -> SeasonSlot {
    let (season, year) = date_to_season(start);
    SeasonSlot {
        season: Some(season),
        year: Some(year),
    }
}

/// Licensor names, in source order; the catalog's "None found" sentinel
/// and empty entries are dropped.
fn licensor_list(licensors: &NameList) -> Vec<String> {
    match licensors {
        NameList::One(name) if name == "None found" || name.is_empty() => Vec::new(),
        NameList::One(name) => vec![name.clone()],
        NameList::Many(names) => names.iter().filter(|n| !n.is_empty()).cloned().collect(),
    }
}
