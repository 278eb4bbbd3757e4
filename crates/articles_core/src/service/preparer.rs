//! Batch preparation for article candidates.
//!
//! # Responsibility
//! - Drop candidates without title or content.
//! - Default absent creation dates to the clock's current date.
//! - Drop candidates fully equal to an already accepted record.
//!
//! # Invariants
//! - Output preserves input order of first occurrences.
//! - Every output record has non-empty title/content and a creation date.
//! - No two output records are field-equal, so preparing twice is a no-op.
//! - Authors pass through untouched; absent stays absent.
//! - Preparation never fails; invalid input is filtered, not reported.

use crate::clock::Clock;
use crate::model::article::{ArticleRecord, Rejection};
use log::{debug, trace};
use std::collections::HashSet;

/// Accepted records plus counters describing what was filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrepareReport {
    /// Accepted records in input order.
    pub accepted: Vec<ArticleRecord>,
    pub missing_title: usize,
    pub missing_content: usize,
    pub duplicates: usize,
    /// Accepted or duplicate candidates whose date came from the clock.
    pub defaulted_dates: usize,
}

impl PrepareReport {
    /// Total number of dropped candidates.
    pub fn dropped(&self) -> usize {
        self.missing_title + self.missing_content + self.duplicates
    }
}

/// Prepares a candidate batch, returning accepted records only.
pub fn prepare_articles<C: Clock + ?Sized>(
    candidates: &[ArticleRecord],
    clock: &C,
) -> Vec<ArticleRecord> {
    prepare_with_report(candidates, clock).accepted
}

/// Prepares a candidate batch and reports per-reason drop counts.
///
/// The clock is read at most once per call so all defaulted records in one
/// batch share the same date.
pub fn prepare_with_report<C: Clock + ?Sized>(
    candidates: &[ArticleRecord],
    clock: &C,
) -> PrepareReport {
    let mut report = PrepareReport::default();
    let mut seen: HashSet<ArticleRecord> = HashSet::with_capacity(candidates.len());
    let mut today = None;

    for (index, candidate) in candidates.iter().enumerate() {
        if let Some(rejection) = candidate.rejection() {
            match rejection {
                Rejection::MissingTitle => report.missing_title += 1,
                Rejection::MissingContent => report.missing_content += 1,
            }
            trace!(
                "event=prepare_reject module=preparer status=skip index={} reason=\"{}\"",
                index,
                rejection
            );
            continue;
        }

        let normalized = if candidate.creation_date.is_some() {
            candidate.clone()
        } else {
            report.defaulted_dates += 1;
            let date = *today.get_or_insert_with(|| clock.today());
            candidate.with_default_date(date)
        };

        if seen.contains(&normalized) {
            report.duplicates += 1;
            continue;
        }
        seen.insert(normalized.clone());
        report.accepted.push(normalized);
    }

    debug!(
        "event=prepare_articles module=preparer status=ok input={} accepted={} missing_title={} missing_content={} duplicates={} defaulted_dates={}",
        candidates.len(),
        report.accepted.len(),
        report.missing_title,
        report.missing_content,
        report.duplicates,
        report.defaulted_dates
    );

    report
}
