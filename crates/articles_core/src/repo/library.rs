//! Library contract and repository errors.
//!
//! # Responsibility
//! - Define the storage capability the worker depends on.
//! - Provide the shared error type for library implementations.
//!
//! # Invariants
//! - `store` receives raw candidates; implementations must accept records
//!   with absent fields.
//! - `get_all_titles` ordering is implementation-defined.

use crate::model::article::ArticleRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Library storage and query error.
#[derive(Debug)]
pub enum RepoError {
    /// Query or write failed in SQLite.
    Sqlite(rusqlite::Error),
    /// A stored row cannot be turned back into an `ArticleRecord`.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "article library query failed: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted article data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Year-grouped article storage.
pub trait Library {
    /// Persists `articles` under the `year` group.
    fn store(&mut self, year: i32, articles: &[ArticleRecord]) -> RepoResult<()>;

    /// Returns every known title.
    fn get_all_titles(&self) -> RepoResult<Vec<String>>;
}

impl<L: Library + ?Sized> Library for &mut L {
    fn store(&mut self, year: i32, articles: &[ArticleRecord]) -> RepoResult<()> {
        (**self).store(year, articles)
    }

    fn get_all_titles(&self) -> RepoResult<Vec<String>> {
        (**self).get_all_titles()
    }
}

impl<L: Library + ?Sized> Library for Box<L> {
    fn store(&mut self, year: i32, articles: &[ArticleRecord]) -> RepoResult<()> {
        (**self).store(year, articles)
    }

    fn get_all_titles(&self) -> RepoResult<Vec<String>> {
        (**self).get_all_titles()
    }
}
