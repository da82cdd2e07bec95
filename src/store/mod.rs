use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::util::{ensure_directory, now_utc_string};

mod proposals;
mod rfps;
mod vendors;

pub use proposals::{insert_proposal, list_proposals_for_rfp};
pub use rfps::{get_rfp, insert_rfp, mark_rfp_sent, record_dispatch};
pub use vendors::{get_vendor, insert_vendor, list_vendors};

pub const DB_FILENAME: &str = "rfpkit.sqlite";
pub const DB_SCHEMA_VERSION: &str = "0.1.0";

pub fn resolve_db_path(cache_root: &Path, db_path: Option<PathBuf>) -> PathBuf {
    db_path.unwrap_or_else(|| cache_root.join(DB_FILENAME))
}

pub fn open_database(cache_root: &Path, db_path: Option<PathBuf>) -> Result<Connection> {
    let path = resolve_db_path(cache_root, db_path);
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    let connection = Connection::open(&path)
        .with_context(|| format!("failed to open database: {}", path.display()))?;
    initialize(&connection)?;
    Ok(connection)
}

pub(crate) fn initialize(connection: &Connection) -> Result<()> {
    configure_connection(connection)?;
    ensure_schema(connection)?;
    Ok(())
}

fn configure_connection(connection: &Connection) -> Result<()> {
    connection
        .pragma_update(None, "journal_mode", "WAL")
        .context("failed to set journal_mode=WAL")?;
    connection
        .pragma_update(None, "synchronous", "NORMAL")
        .context("failed to set synchronous=NORMAL")?;
    connection
        .pragma_update(None, "foreign_keys", "ON")
        .context("failed to enable foreign keys")?;
    Ok(())
}

fn ensure_schema(connection: &Connection) -> Result<()> {
    connection.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS metadata (
          key TEXT PRIMARY KEY,
          value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS rfps (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          title TEXT NOT NULL,
          description_raw TEXT NOT NULL,
          budget INTEGER,
          delivery_deadline TEXT,
          payment_terms TEXT,
          warranty_min_months INTEGER,
          items_json TEXT NOT NULL,
          status TEXT NOT NULL,
          is_fallback INTEGER NOT NULL DEFAULT 0,
          source_hash TEXT NOT NULL,
          created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS vendors (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          name TEXT NOT NULL,
          email TEXT NOT NULL,
          category TEXT,
          notes TEXT,
          created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS proposals (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          rfp_id INTEGER NOT NULL,
          vendor_id INTEGER NOT NULL,
          raw_text TEXT NOT NULL,
          total_price REAL,
          currency TEXT,
          delivery_days INTEGER,
          warranty_years REAL,
          payment_terms TEXT,
          summary TEXT,
          score REAL,
          is_fallback INTEGER NOT NULL DEFAULT 0,
          source_hash TEXT NOT NULL,
          created_at TEXT NOT NULL,
          FOREIGN KEY(rfp_id) REFERENCES rfps(id),
          FOREIGN KEY(vendor_id) REFERENCES vendors(id)
        );

        CREATE TABLE IF NOT EXISTS dispatches (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          rfp_id INTEGER NOT NULL,
          vendor_id INTEGER NOT NULL,
          status TEXT NOT NULL,
          created_at TEXT NOT NULL,
          FOREIGN KEY(rfp_id) REFERENCES rfps(id),
          FOREIGN KEY(vendor_id) REFERENCES vendors(id)
        );

        CREATE INDEX IF NOT EXISTS idx_proposals_rfp ON proposals(rfp_id);
        CREATE INDEX IF NOT EXISTS idx_proposals_rfp_vendor ON proposals(rfp_id, vendor_id);
        CREATE INDEX IF NOT EXISTS idx_dispatches_rfp ON dispatches(rfp_id);
        ",
    )?;

    let now = now_utc_string();
    connection.execute(
        "INSERT INTO metadata(key, value) VALUES('db_schema_version', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        [DB_SCHEMA_VERSION],
    )?;
    connection.execute(
        "INSERT INTO metadata(key, value) VALUES('db_updated_at', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        [now],
    )?;

    Ok(())
}

pub fn query_count(connection: &Connection, sql: &str) -> Result<i64> {
    let count = connection.query_row(sql, [], |row| row.get(0))?;
    Ok(count)
}

pub fn schema_version(connection: &Connection) -> Result<Option<String>> {
    use rusqlite::OptionalExtension;

    let version = connection
        .query_row(
            "SELECT value FROM metadata WHERE key = 'db_schema_version'",
            [],
            |row| row.get(0),
        )
        .optional()?;
    Ok(version)
}

// In-memory databases reject the WAL pragma, so tests only apply the schema.
#[cfg(test)]
pub(crate) fn open_in_memory() -> Connection {
    let connection = Connection::open_in_memory().unwrap();
    ensure_schema(&connection).unwrap();
    connection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_initialization_is_idempotent() {
        let connection = open_in_memory();
        ensure_schema(&connection).unwrap();

        assert_eq!(
            schema_version(&connection).unwrap().as_deref(),
            Some(DB_SCHEMA_VERSION)
        );
        assert_eq!(query_count(&connection, "SELECT COUNT(*) FROM rfps").unwrap(), 0);
        assert_eq!(
            query_count(&connection, "SELECT COUNT(*) FROM vendors").unwrap(),
            0
        );
    }
}
