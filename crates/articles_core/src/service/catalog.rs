//! Catalog text rendering.
//!
//! Output is a header line followed by one line per title, or by the
//! configured empty message. Titles are written verbatim so callers can
//! search the catalog for them.

use crate::config::CatalogConfig;

/// Renders the catalog listing for the given titles.
///
/// Never returns empty text.
pub fn format_catalog<S: AsRef<str>>(titles: &[S], config: &CatalogConfig) -> String {
    let mut out = String::new();
    out.push_str(config.header());
    out.push('\n');

    if titles.is_empty() {
        out.push_str(config.empty_message());
        out.push('\n');
        return out;
    }

    for (index, title) in titles.iter().enumerate() {
        let line = if config.numbered {
            format!("{}. {}\n", index + 1, title.as_ref())
        } else {
            format!("- {}\n", title.as_ref())
        };
        out.push_str(&line);
    }
    out
}
