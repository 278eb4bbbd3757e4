//! Connection bootstrap for the article database.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON` and a busy timeout.
//! - Returned connections carry the current `articles` schema.

use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Schema version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: u32 = 1;

const SCHEMA_SQL: &str = include_str!("schema.sql");
const MEMORY_LOCATION: &str = ":memory:";
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens an article database file, creating file and schema when missing.
///
/// # Side effects
/// - Emits `db_open` events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    open_with(path.display().to_string(), || Connection::open(path))
}

/// Opens an in-memory article database with the schema in place.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with(MEMORY_LOCATION.to_string(), Connection::open_in_memory)
}

fn open_with<F>(location: String, connect: F) -> DbResult<Connection>
where
    F: FnOnce() -> rusqlite::Result<Connection>,
{
    let started_at = Instant::now();
    info!("event=db_open module=db status=start location={location}");

    let result = connect()
        .map_err(|source| DbError::Open {
            location: location.clone(),
            source,
        })
        .and_then(|mut conn| {
            prepare_connection(&mut conn, &location)?;
            Ok(conn)
        });

    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok location={} duration_ms={}",
            location,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error location={} duration_ms={} error={}",
            location,
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

fn prepare_connection(conn: &mut Connection, location: &str) -> DbResult<()> {
    let schema_err = |source| DbError::Schema {
        location: location.to_string(),
        source,
    };

    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(schema_err)?;
    conn.busy_timeout(BUSY_TIMEOUT).map_err(schema_err)?;

    let found: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .map_err(schema_err)?;
    if found > SCHEMA_VERSION {
        return Err(DbError::SchemaTooNew {
            location: location.to_string(),
            found,
            supported: SCHEMA_VERSION,
        });
    }
    if found == SCHEMA_VERSION {
        return Ok(());
    }

    // Only version 0 (fresh file) reaches here while one schema exists.
    let tx = conn.transaction().map_err(schema_err)?;
    tx.execute_batch(SCHEMA_SQL).map_err(schema_err)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))
        .map_err(schema_err)?;
    tx.commit().map_err(schema_err)?;

    info!(
        "event=db_schema module=db status=ok location={} from_version={} to_version={}",
        location, found, SCHEMA_VERSION
    );
    Ok(())
}
