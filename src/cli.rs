use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::scraper::MediaKind;

/// kisetsu - anime and manga metadata aggregator
#[derive(Parser)]
#[command(name = "kisetsu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape the catalog and reconcile each title with the media graph
    Scrape {
        /// What type of media to scrape
        #[arg(value_enum)]
        kind: MediaKind,

        /// Where to save the per-title documents
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// Number of listing pages to look at
        #[arg(short, long)]
        page_limit: Option<u32>,

        /// Revisit every title instead of only new ones
        #[arg(short, long)]
        all: bool,
    },

    /// Rebuild the season index over the scraped corpus
    Seasons {
        /// Replace index attributes instead of only filling gaps
        #[arg(long)]
        overwrite: bool,

        /// Path of the season index file
        #[arg(long)]
        index: Option<PathBuf>,
    },
}
