//! Schema migrations. The store is a single key/value table holding JSON
//! blobs, plus the internal audit log; both are created idempotently and
//! versioned through `PRAGMA user_version`.

use crate::ui::messages::success;
use rusqlite::{Connection, Result};

const SCHEMA_VERSION: i32 = 1;

fn current_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

fn set_version(conn: &Connection, version: i32) -> Result<()> {
    conn.pragma_update(None, "user_version", version)?;
    Ok(())
}

/// Ensure the `kv` table exists.
fn ensure_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Run any pending migrations. Safe to call on every startup.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_kv_table(conn)?;
    ensure_log_table(conn)?;

    if current_version(conn)? < SCHEMA_VERSION {
        set_version(conn, SCHEMA_VERSION)?;
        success(format!("Database schema at version {}", SCHEMA_VERSION));
    }

    Ok(())
}
