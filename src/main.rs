use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use kisetsu::cli::{Cli, Commands};
use kisetsu::config::AppConfig;
use kisetsu::scraper::{
    CatalogProvider, MediaGraphProvider, MetadataStore, OrganizerConfig, RunOptions, Runner,
    ScrapeMode, SeasonOrganizer,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing();

    let config = AppConfig::load()?;

    match cli.command {
        Commands::Scrape {
            kind,
            destination,
            page_limit,
            all,
        } => {
            let options = RunOptions {
                kind,
                mode: if all {
                    ScrapeMode::Full
                } else {
                    ScrapeMode::Incremental
                },
                page_limit: page_limit.unwrap_or(config.page_limit),
            };

            let runner = Runner::new(
                Box::new(CatalogProvider::new(
                    &config.catalog_url,
                    config.request_interval(),
                )),
                Box::new(MediaGraphProvider::new(
                    &config.mediagraph_url,
                    config.request_interval(),
                )),
                MetadataStore::new(destination.unwrap_or_else(|| config.data_dir.clone())),
            );

            runner.run(&options).await?;
        }

        Commands::Seasons { overwrite, index } => {
            let organizer = SeasonOrganizer::new(OrganizerConfig {
                corpus_dir: config.data_dir.clone(),
                index_path: index.unwrap_or_else(|| config.season_index.clone()),
                overwrite,
            });

            organizer.run().await?;
        }
    }

    Ok(())
}

/// Console and daily-rolling file logging; the guard must outlive the
/// run so buffered file output is flushed.
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", "kisetsu.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false),
        )
        .init();

    guard
}
