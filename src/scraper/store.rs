use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::scraper::{Result, types::CanonicalRecord};

/// Outcome of persisting a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No document existed for the ID.
    Created,
    /// A document existed with different content and was replaced.
    Updated,
    /// The existing document already matched byte for byte.
    Unchanged,
}

/// On-disk corpus: one pretty-printed JSON document per title, named by
/// catalog ID. Non-ASCII text is stored unescaped.
pub struct MetadataStore {
    base_dir: PathBuf,
}

impl MetadataStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the document for a catalog ID.
    #[must_use]
    pub fn path_for(&self, catalog_id: u64) -> PathBuf {
        self.base_dir.join(format!("{catalog_id}.json"))
    }

    /// Whether a document already exists for the ID.
    #[must_use]
    pub fn contains(&self, catalog_id: u64) -> bool {
        self.path_for(catalog_id).exists()
    }

    /// Persist a record, replacing any previous document wholesale.
    ///
    /// The byte comparison against the existing file decides whether the
    /// caller sees the title as updated or unchanged. A failed write
    /// removes the partial file before the error propagates.
    pub async fn write(&self, record: &CanonicalRecord) -> Result<WriteOutcome> {
        tokio::fs::create_dir_all(&self.base_dir).await?;

        let path = self.path_for(record.catalog_id);
        let serialized = serde_json::to_string_pretty(record)?;

        let outcome = match tokio::fs::read_to_string(&path).await {
            Ok(existing) if existing == serialized => return Ok(WriteOutcome::Unchanged),
            Ok(_) => WriteOutcome::Updated,
            Err(_) => WriteOutcome::Created,
        };

        if let Err(err) = dump(&path, &serialized).await {
            // Never leave a half-written document behind.
            let _ = tokio::fs::remove_file(&path).await;
            return Err(err);
        }

        Ok(outcome)
    }

    /// Load a previously written document.
    pub async fn read(&self, catalog_id: u64) -> Result<CanonicalRecord> {
        let contents = tokio::fs::read_to_string(self.path_for(catalog_id)).await?;
        Ok(serde_json::from_str(&contents)?)
    }
}

async fn dump(path: &Path, serialized: &str) -> Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(serialized.as_bytes()).await?;
    Ok(())
}
