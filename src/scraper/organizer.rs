use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::scraper::{
    Result,
    types::{CanonicalRecord, SeasonSlot},
};

/// Season organizer configuration.
#[derive(Debug, Clone)]
pub struct OrganizerConfig {
    /// Directory holding the `{id}.json` corpus.
    pub corpus_dir: PathBuf,
    /// Path of the season index file.
    pub index_path: PathBuf,
    /// Replace non-null index attributes instead of only filling nulls.
    pub overwrite: bool,
}

/// Season index: catalog ID to season/year, persisted as one JSON file.
type SeasonIndex = BTreeMap<u64, SeasonSlot>;

/// Builds and maintains the season index over the scraped corpus.
pub struct SeasonOrganizer {
    config: OrganizerConfig,
}

impl SeasonOrganizer {
    pub fn new(config: OrganizerConfig) -> Self {
        Self { config }
    }

    /// Walk the corpus and fold every record's season into the index.
    ///
    /// The index is written back even when the walk fails partway, so
    /// entries folded so far are not lost.
    pub async fn run(&self) -> Result<()> {
        let mut index = self.load_index().await?;

        let walk = self.fold_corpus(&mut index).await;
        self.write_index(&index).await?;
        walk
    }

    async fn fold_corpus(&self, index: &mut SeasonIndex) -> Result<()> {
        let mut entries = tokio::fs::read_dir(&self.config.corpus_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }

            let contents = tokio::fs::read_to_string(&path).await?;
            match serde_json::from_str::<CanonicalRecord>(&contents) {
                Ok(record) => self.fold_record(index, &record),
                Err(err) => warn!("Skipping unreadable document {}: {err}", path.display()),
            }
        }

        Ok(())
    }

    fn fold_record(&self, index: &mut SeasonIndex, record: &CanonicalRecord) {
        let slot = record.season;

        match index.get_mut(&record.catalog_id) {
            None => {
                index.insert(record.catalog_id, slot);
            }
            Some(existing) if self.config.overwrite => {
                // A known value is never clobbered by a null.
                if slot.season.is_some() {
                    existing.season = slot.season;
                }
                if slot.year.is_some() {
                    existing.year = slot.year;
                }
            }
            Some(existing) if existing.season.is_none() || existing.year.is_none() => {
                if existing.season.is_none() {
                    existing.season = slot.season;
                }
                if existing.year.is_none() {
                    existing.year = slot.year;
                }
            }
            Some(_) => debug!("Index entry {} already complete", record.catalog_id),
        }
    }

    async fn load_index(&self) -> Result<SeasonIndex> {
        match tokio::fs::read_to_string(&self.config.index_path).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(SeasonIndex::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_index(&self, index: &SeasonIndex) -> Result<()> {
        if let Some(parent) = self.config.index_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let serialized = serde_json::to_string_pretty(index)?;
        tokio::fs::write(&self.config.index_path, serialized).await?;

        info!(
            "Season index written: {} entries at {}",
            index.len(),
            self.config.index_path.display()
        );
        Ok(())
    }
}
