// src/storage.rs

use crate::error::Result;
use crate::repository;
use rusqlite::Connection;
use std::collections::HashMap;

/// Synchronous, local key-value storage for persisted preferences.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// SQLite-backed storage; survives process restarts when file-backed.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Expects a connection already initialized by `database::init_db`.
    pub fn new(conn: Connection) -> Self {
        SqliteStorage { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl Storage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(repository::get_item(&self.conn, key)?)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        Ok(repository::set_item(&self.conn, key, value)?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;

    #[test]
    fn sqlite_storage_round_trips_through_table() {
        let mut storage = SqliteStorage::new(database::open(None).unwrap());
        assert_eq!(storage.get_item("dark-mode").unwrap(), None);
        storage.set_item("dark-mode", "enabled").unwrap();
        assert_eq!(
            repository::get_item(storage.connection(), "dark-mode")
                .unwrap()
                .as_deref(),
            Some("enabled")
        );
    }

    #[test]
    fn sqlite_storage_without_schema_reports_error() {
        let storage = SqliteStorage::new(Connection::open_in_memory().unwrap());
        assert!(storage.get_item("dark-mode").is_err());
    }

    #[test]
    fn memory_storage_overwrites() {
        let mut storage = MemoryStorage::new();
        storage.set_item("k", "a").unwrap();
        storage.set_item("k", "b").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("b"));
    }
}
