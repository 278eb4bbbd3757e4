//! In-memory library grouped by year.

use crate::model::article::ArticleRecord;
use crate::repo::library::{Library, RepoResult};
use log::debug;
use std::collections::BTreeMap;

/// Library kept in a year-ordered map; never fails.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLibrary {
    groups: BTreeMap<i32, Vec<ArticleRecord>>,
}

impl InMemoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Articles stored under `year`, in insertion order.
    pub fn articles_for_year(&self, year: i32) -> &[ArticleRecord] {
        self.groups.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Years with at least one stored article, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.groups
            .iter()
            .filter(|(_, articles)| !articles.is_empty())
            .map(|(year, _)| *year)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Library for InMemoryLibrary {
    fn store(&mut self, year: i32, articles: &[ArticleRecord]) -> RepoResult<()> {
        self.groups
            .entry(year)
            .or_default()
            .extend_from_slice(articles);
        debug!(
            "event=library_store module=memory_library status=ok year={} count={}",
            year,
            articles.len()
        );
        Ok(())
    }

    /// Titles in year order, then insertion order; absent titles skipped.
    fn get_all_titles(&self) -> RepoResult<Vec<String>> {
        Ok(self
            .groups
            .values()
            .flatten()
            .filter_map(|article| article.title.clone())
            .collect())
    }
}
