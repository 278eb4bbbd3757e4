//! SQLite-backed library.
//!
//! # Responsibility
//! - Persist article batches into the `articles` table under a year group.
//! - Read titles and stored records back.
//!
//! # Invariants
//! - A batch is written in one transaction; partial batches never persist.
//! - Dates are stored as ISO `YYYY-MM-DD` text; anything else read back is
//!   reported as `RepoError::InvalidData`.

use crate::model::article::ArticleRecord;
use crate::repo::library::{Library, RepoError, RepoResult};
use chrono::NaiveDate;
use log::{debug, error};
use rusqlite::{params, Connection, Row};

const DATE_FORMAT: &str = "%Y-%m-%d";

const ARTICLE_SELECT_SQL: &str = "SELECT
    title,
    content,
    author,
    creation_date
FROM articles";

/// Library persisted in SQLite.
pub struct SqliteLibrary<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLibrary<'conn> {
    /// Wraps a connection returned by `db::open_db*`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Articles stored under `year`, in insertion order.
    pub fn articles_for_year(&self, year: i32) -> RepoResult<Vec<ArticleRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ARTICLE_SELECT_SQL}
             WHERE year = ?1
             ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([year])?;
        let mut articles = Vec::new();
        while let Some(row) = rows.next()? {
            articles.push(parse_article_row(row)?);
        }
        Ok(articles)
    }

    /// Distinct stored years, ascending.
    pub fn years(&self) -> RepoResult<Vec<i32>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT year FROM articles ORDER BY year ASC;")?;
        let years = stmt
            .query_map([], |row| row.get::<_, i32>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(years)
    }
}

impl Library for SqliteLibrary<'_> {
    fn store(&mut self, year: i32, articles: &[ArticleRecord]) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO articles (
                    year,
                    title,
                    content,
                    author,
                    creation_date
                ) VALUES (?1, ?2, ?3, ?4, ?5);",
            )?;
            for article in articles {
                if let Err(err) = stmt.execute(params![
                    year,
                    article.title.as_deref(),
                    article.content.as_deref(),
                    article.author.as_deref(),
                    article.creation_date.map(format_date),
                ]) {
                    error!(
                        "event=library_store module=sqlite_library status=error year={} count={} error={}",
                        year,
                        articles.len(),
                        err
                    );
                    return Err(err.into());
                }
            }
        }
        tx.commit()?;

        debug!(
            "event=library_store module=sqlite_library status=ok year={} count={}",
            year,
            articles.len()
        );
        Ok(())
    }

    /// Non-null titles ordered by year, then insertion order.
    fn get_all_titles(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT title
             FROM articles
             WHERE title IS NOT NULL
             ORDER BY year ASC, id ASC;",
        )?;
        let titles = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(titles)
    }
}

fn parse_article_row(row: &Row<'_>) -> RepoResult<ArticleRecord> {
    let creation_date = match row.get::<_, Option<String>>("creation_date")? {
        Some(text) => Some(parse_date(&text)?),
        None => None,
    };

    Ok(ArticleRecord {
        title: row.get("title")?,
        content: row.get("content")?,
        author: row.get("author")?,
        creation_date,
    })
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_date(text: &str) -> RepoResult<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid date `{text}` in articles.creation_date"
        ))
    })
}
