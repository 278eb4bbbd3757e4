//! Article database bootstrap.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections ready for `SqliteLibrary`.
//! - Create the `articles` schema on first open.
//!
//! # Invariants
//! - The schema version lives in `PRAGMA user_version`.
//! - Every error names the database it came from.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{open_db, open_db_in_memory, SCHEMA_VERSION};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or preparing an article database.
#[derive(Debug)]
pub enum DbError {
    /// SQLite could not open the file or memory database.
    Open {
        location: String,
        source: rusqlite::Error,
    },
    /// Pragmas or schema creation failed on an open connection.
    Schema {
        location: String,
        source: rusqlite::Error,
    },
    /// The file was written by a newer build.
    SchemaTooNew {
        location: String,
        found: u32,
        supported: u32,
    },
}

impl DbError {
    /// Database path, or `:memory:`.
    pub fn location(&self) -> &str {
        match self {
            Self::Open { location, .. }
            | Self::Schema { location, .. }
            | Self::SchemaTooNew { location, .. } => location,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { location, source } => {
                write!(f, "cannot open article database `{location}`: {source}")
            }
            Self::Schema { location, source } => {
                write!(f, "cannot prepare article schema in `{location}`: {source}")
            }
            Self::SchemaTooNew {
                location,
                found,
                supported,
            } => write!(
                f,
                "article database `{location}` has schema version {found}; this build reads up to {supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Schema { source, .. } => Some(source),
            Self::SchemaTooNew { .. } => None,
        }
    }
}
