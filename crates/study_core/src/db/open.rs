//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Ensure the schema exists before handing the connection out.
//!
//! # Invariants
//! - Returned connections have every table from `schema::SCHEMA_SQL`.
//! - `foreign_keys` is switched off on every connection, whatever the
//!   build-time default of the linked SQLite.

use super::schema::ensure_schema;
use super::DbResult;
use log::{debug, error};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens a SQLite database file, creating it and its tables when absent.
///
/// # Side effects
/// - Creates the file if it does not exist.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    let conn = Connection::open(path.as_ref()).map_err(|err| {
        error!(
            "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
            started_at.elapsed().as_millis(),
            err
        );
        err
    })?;
    finish_open(conn, "file", started_at)
}

/// Opens an in-memory SQLite database with the schema applied.
///
/// Data lives only as long as the returned connection.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    let conn = Connection::open_in_memory().map_err(|err| {
        error!(
            "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
            started_at.elapsed().as_millis(),
            err
        );
        err
    })?;
    finish_open(conn, "memory", started_at)
}

fn finish_open(conn: Connection, mode: &str, started_at: Instant) -> DbResult<Connection> {
    match bootstrap_connection(&conn) {
        Ok(()) => {
            debug!(
                "event=db_open module=db status=ok mode={} duration_ms={}",
                mode,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &Connection) -> DbResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    conn.pragma_update(None, "foreign_keys", "OFF")?;
    ensure_schema(conn)
}
