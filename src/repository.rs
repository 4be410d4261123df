// src/repository.rs

use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Result};

/// Reads one stored value, `None` when the key was never written.
pub fn get_item(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM local_storage WHERE key = ?",
        [key],
        |row| row.get(0),
    )
    .optional()
}

pub fn set_item(conn: &Connection, key: &str, value: &str) -> Result<()> {
    debug!("[DB] set {} = {}", key, value);
    conn.execute(
        "INSERT OR REPLACE INTO local_storage (key, value) VALUES (?, ?)",
        params![key, value],
    )?;
    Ok(())
}
