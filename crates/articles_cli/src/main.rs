//! Command line entry point for article ingestion.
//!
//! # Responsibility
//! - Load a JSON batch of candidates, prepare it, and store accepted
//!   articles into a SQLite library one year group at a time.
//! - Print the resulting catalog.

use articles_core::db::open_db;
use articles_core::{
    default_log_level, init_logging, ArticleRecord, ArticleWorker, Clock, Library, SqliteLibrary,
};
use clap::Parser;
use log::info;
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Prepare article batches and print the library catalog")]
struct Cli {
    /// JSON file holding an array of article records
    #[arg(required_unless_present = "catalog_only")]
    batch: Option<PathBuf>,

    /// SQLite library file
    #[arg(long, env = "ARTICLES_DB", default_value = "articles.sqlite3")]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "ARTICLES_LOG_DIR")]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "ARTICLES_LOG_LEVEL")]
    log_level: Option<String>,

    /// Print the catalog without ingesting a batch
    #[arg(long)]
    catalog_only: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let conn = open_db(&args.db)?;
    let mut worker = ArticleWorker::new(SqliteLibrary::new(&conn));

    if !args.catalog_only {
        if let Some(batch) = args.batch.as_ref() {
            ingest(&mut worker, batch)?;
        }
    }

    print!("{}", worker.get_catalog()?);
    Ok(())
}

fn ingest<L: Library, C: Clock>(
    worker: &mut ArticleWorker<L, C>,
    batch: &Path,
) -> Result<(), Box<dyn Error>> {
    let raw = std::fs::read_to_string(batch)?;
    let candidates: Vec<ArticleRecord> = serde_json::from_str(&raw)?;

    let summary = worker.ingest_prepared(&candidates)?;
    info!(
        "event=cli_ingest module=cli status=ok input={} years={:?}",
        candidates.len(),
        summary.years
    );
    eprintln!(
        "ingested {} of {} candidates ({} dropped)",
        summary.report.accepted.len(),
        candidates.len(),
        summary.report.dropped()
    );
    Ok(())
}
