//! Core logic for article ingestion.
//! This crate owns the preparation rules applied before articles reach a
//! library.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CatalogConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::article::{ArticleRecord, Rejection};
pub use repo::library::{Library, RepoError, RepoResult};
pub use repo::memory_library::InMemoryLibrary;
pub use repo::sqlite_library::SqliteLibrary;
pub use service::catalog::format_catalog;
pub use service::preparer::{prepare_articles, prepare_with_report, PrepareReport};
pub use service::worker::{group_by_year, ArticleWorker, IngestSummary};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
