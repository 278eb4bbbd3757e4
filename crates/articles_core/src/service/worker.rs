//! Article ingestion and reporting service.
//!
//! # Responsibility
//! - Expose preparation and storage as two separate entry points.
//! - Render the catalog from titles known to the library.
//!
//! # Invariants
//! - `add_new_articles` hands the library the caller's list unmodified; it
//!   never prepares it first.
//! - `prepare_articles` never touches the library.
//! - `get_catalog` never returns empty text.

use crate::clock::{Clock, SystemClock};
use crate::config::CatalogConfig;
use crate::model::article::ArticleRecord;
use crate::repo::library::{Library, RepoResult};
use crate::service::catalog::format_catalog;
use crate::service::preparer::{prepare_with_report, PrepareReport};
use chrono::Datelike;
use log::{error, info};
use std::collections::BTreeMap;

/// Outcome of `ArticleWorker::ingest_prepared`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub report: PrepareReport,
    /// Year groups handed to the library, ascending.
    pub years: Vec<i32>,
}

/// Orchestrates the preparer, a library and catalog rendering.
pub struct ArticleWorker<L: Library, C: Clock = SystemClock> {
    library: L,
    clock: C,
    catalog: CatalogConfig,
}

impl<L: Library> ArticleWorker<L> {
    /// Creates a worker using the local system date for defaulting.
    pub fn new(library: L) -> Self {
        Self::with_clock(library, SystemClock)
    }
}

impl<L: Library, C: Clock> ArticleWorker<L, C> {
    /// Creates a worker with an explicit clock.
    pub fn with_clock(library: L, clock: C) -> Self {
        Self {
            library,
            clock,
            catalog: CatalogConfig::default(),
        }
    }

    /// Replaces the catalog layout.
    pub fn with_catalog_config(mut self, catalog: CatalogConfig) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    /// Stores `candidates` under one year group.
    ///
    /// # Contract
    /// - Empty input stores nothing.
    /// - The year comes from the first candidate with a creation date, or
    ///   the clock's current year when none has one.
    /// - Candidates are passed through as given; call `prepare_articles`
    ///   first when only accepted records should be stored.
    pub fn add_new_articles(&mut self, candidates: &[ArticleRecord]) -> RepoResult<()> {
        if candidates.is_empty() {
            info!("event=add_new_articles module=worker status=skip reason=empty_batch");
            return Ok(());
        }

        let year = self.batch_year(candidates);
        match self.library.store(year, candidates) {
            Ok(()) => {
                info!(
                    "event=add_new_articles module=worker status=ok year={} count={}",
                    year,
                    candidates.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=add_new_articles module=worker status=error year={} count={} error={}",
                    year,
                    candidates.len(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Prepares `candidates`, then stores accepted records with one
    /// `add_new_articles` call per creation year.
    ///
    /// Stops at the first failing year; earlier years stay stored.
    pub fn ingest_prepared(&mut self, candidates: &[ArticleRecord]) -> RepoResult<IngestSummary> {
        let report = self.prepare_with_report(candidates);
        let groups = group_by_year(&report.accepted, self.clock.today().year());

        for group in groups.values() {
            self.add_new_articles(group)?;
        }

        info!(
            "event=ingest_prepared module=worker status=ok input={} accepted={} dropped={} years={}",
            candidates.len(),
            report.accepted.len(),
            report.dropped(),
            groups.len()
        );
        Ok(IngestSummary {
            report,
            years: groups.into_keys().collect(),
        })
    }

    /// Validates, date-defaults and deduplicates `candidates`.
    pub fn prepare_articles(&self, candidates: &[ArticleRecord]) -> Vec<ArticleRecord> {
        self.prepare_with_report(candidates).accepted
    }

    /// Same as `prepare_articles`, with drop counters.
    pub fn prepare_with_report(&self, candidates: &[ArticleRecord]) -> PrepareReport {
        prepare_with_report(candidates, &self.clock)
    }

    /// Renders the catalog of every title known to the library.
    pub fn get_catalog(&self) -> RepoResult<String> {
        let titles = self.library.get_all_titles().map_err(|err| {
            error!("event=get_catalog module=worker status=error error={err}");
            err
        })?;
        info!(
            "event=get_catalog module=worker status=ok titles={}",
            titles.len()
        );
        Ok(format_catalog(&titles, &self.catalog))
    }

    fn batch_year(&self, candidates: &[ArticleRecord]) -> i32 {
        candidates
            .iter()
            .find_map(ArticleRecord::year)
            .unwrap_or_else(|| self.clock.today().year())
    }
}

/// Splits records by creation year, keeping input order inside each year.
///
/// Undated records go to `fallback_year`.
pub fn group_by_year(
    records: &[ArticleRecord],
    fallback_year: i32,
) -> BTreeMap<i32, Vec<ArticleRecord>> {
    let mut groups: BTreeMap<i32, Vec<ArticleRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.year().unwrap_or(fallback_year))
            .or_default()
            .push(record.clone());
    }
    groups
}
