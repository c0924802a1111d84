use tracing::{info, warn};

use crate::scraper::{
    Result,
    provider::{CatalogSource, MediaGraphSource},
    reconcile::reconcile,
    store::{MetadataStore, WriteOutcome},
    types::{CatalogRecord, MediaGraphResult, MediaKind},
};

/// How a run treats titles already on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeMode {
    /// Skip titles that already have a document.
    Incremental,
    /// Re-reconcile everything, overwriting changed documents.
    Full,
}

/// Immutable per-run options, constructed per call and never shared.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub kind: MediaKind,
    pub mode: ScrapeMode,
    /// Page cap for incremental runs; full runs stop at corpus
    /// exhaustion instead.
    pub page_limit: u32,
}

/// Per-run counters, reported when the run ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub scraped: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

/// Drives pagination, the per-title reconcile, and persistence.
///
/// One title at a time; the reconciliation itself is pure, so the only
/// state between titles is the store on disk.
pub struct Runner {
    catalog: Box<dyn CatalogSource>,
    mediagraph: Box<dyn MediaGraphSource>,
    store: MetadataStore,
}

impl Runner {
    pub fn new(
        catalog: Box<dyn CatalogSource>,
        mediagraph: Box<dyn MediaGraphSource>,
        store: MetadataStore,
    ) -> Self {
        Self {
            catalog,
            mediagraph,
            store,
        }
    }

    pub async fn run(&self, options: &RunOptions) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut page = 1;

        loop {
            if options.mode == ScrapeMode::Incremental && page > options.page_limit {
                break;
            }

            let listing = self.catalog.fetch_page(options.kind, page).await?;

            for raw in &listing.data {
                self.process(options, raw, &mut summary).await?;
            }

            if !listing.pagination.has_next_page {
                break;
            }
            page = listing.pagination.current_page + 1;
        }

        info!(
            "Run finished: {} scraped, {} updated, {} unchanged, {} skipped",
            summary.scraped, summary.updated, summary.unchanged, summary.skipped
        );
        Ok(summary)
    }

    async fn process(
        &self,
        options: &RunOptions,
        raw: &serde_json::Value,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let catalog = CatalogRecord::from_value(raw)?;

        if options.mode == ScrapeMode::Incremental && self.store.contains(catalog.id) {
            summary.skipped += 1;
            return Ok(());
        }

        let lookup = self.mediagraph.lookup(options.kind, catalog.id).await?;
        if let MediaGraphResult::Missing(reason) = &lookup {
            warn!(
                "No media-graph record for {} ({reason}); using catalog only",
                catalog.id
            );
        }

        let record = reconcile(&catalog, &lookup);

        match self.store.write(&record).await? {
            WriteOutcome::Created => {
                summary.scraped += 1;
                info!("Scraped {:<6} | <{}>", record.catalog_id, record.title);
            }
            WriteOutcome::Updated => {
                summary.updated += 1;
                info!("Updated {:<6} | <{}>", record.catalog_id, record.title);
            }
            WriteOutcome::Unchanged => summary.unchanged += 1,
        }

        Ok(())
    }
}
