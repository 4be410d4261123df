// src/database.rs

use log::{debug, info};
use rusqlite::{Connection, Result};
use std::path::Path;

/// Opens the key-value store at `path`, or an in-memory one when `None`.
pub fn open(path: Option<&Path>) -> Result<Connection> {
    let conn = match path {
        Some(p) => {
            info!("Storage path: {:?}", p);
            Connection::open(p)?
        }
        None => {
            info!("Storage path: <memory>");
            Connection::open_in_memory()?
        }
    };
    init_db(&conn)?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    debug!("init_db: Checking storage schema...");

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS local_storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        init_db(&conn).unwrap();
        let count: i64 = conn
            .query_row("SELECT count(*) FROM local_storage", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn open_without_path_is_in_memory() {
        let conn = open(None).unwrap();
        conn.execute(
            "INSERT INTO local_storage (key, value) VALUES ('k', 'v')",
            [],
        )
        .unwrap();
    }
}
