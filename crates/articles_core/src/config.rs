//! Catalog rendering configuration.
//!
//! # Invariants
//! - `header()` and `empty_message()` never return blank text; blank
//!   configured values fall back to the defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CATALOG_HEADER: &str = "Article catalog";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No articles in the library.";

/// Controls how `get_catalog` lays out titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub header: String,
    pub empty_message: String,
    /// `N. title` when true, `- title` otherwise.
    pub numbered: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_CATALOG_HEADER.to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            numbered: true,
        }
    }
}

impl CatalogConfig {
    /// Effective header line.
    pub fn header(&self) -> &str {
        non_blank_or(&self.header, DEFAULT_CATALOG_HEADER)
    }

    /// Effective line used when the library has no titles.
    pub fn empty_message(&self) -> &str {
        non_blank_or(&self.empty_message, DEFAULT_EMPTY_MESSAGE)
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}
