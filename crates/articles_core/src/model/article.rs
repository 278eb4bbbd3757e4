//! Article record model.
//!
//! # Responsibility
//! - Define `ArticleRecord`, the value object shared by the preparer, the
//!   worker and library implementations.
//! - Classify why a candidate cannot be accepted.
//!
//! # Invariants
//! - Absent fields are `None`, never sentinel strings or dates.
//! - Records are never mutated by preparation; defaulting builds new values.
//! - Two records are duplicates exactly when all four fields are equal.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Candidate or accepted article.
///
/// Field-wise equality (`PartialEq`/`Hash`) is the duplicate relation used
/// by the preparer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ArticleRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// Serialized as ISO `YYYY-MM-DD`.
    #[serde(default)]
    pub creation_date: Option<NaiveDate>,
}

/// Reason a candidate is dropped during preparation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Title is absent or empty.
    MissingTitle,
    /// Content is absent or empty.
    MissingContent,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "title is absent or empty"),
            Self::MissingContent => write!(f, "content is absent or empty"),
        }
    }
}

impl ArticleRecord {
    /// Creates a record from optional fields exactly as supplied.
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        author: Option<String>,
        creation_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            title,
            content,
            author,
            creation_date,
        }
    }

    /// Creates a fully populated record.
    pub fn dated(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        creation_date: NaiveDate,
    ) -> Self {
        Self::new(
            Some(title.into()),
            Some(content.into()),
            Some(author.into()),
            Some(creation_date),
        )
    }

    /// Returns why this record would be rejected, title checked first.
    pub fn rejection(&self) -> Option<Rejection> {
        if !has_text(self.title.as_deref()) {
            return Some(Rejection::MissingTitle);
        }
        if !has_text(self.content.as_deref()) {
            return Some(Rejection::MissingContent);
        }
        None
    }

    /// Year component of `creation_date`, used as the library grouping key.
    pub fn year(&self) -> Option<i32> {
        self.creation_date.map(|date| date.year())
    }

    /// Returns a copy with `creation_date` filled in when absent.
    pub fn with_default_date(&self, today: NaiveDate) -> Self {
        Self {
            creation_date: Some(self.creation_date.unwrap_or(today)),
            ..self.clone()
        }
    }
}

// Zero-length text counts as missing; whitespace is kept as-is.
fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.is_empty())
}
