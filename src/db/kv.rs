//! SQLite-backed [`KeyValueStore`].

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::KeyValueStore;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open (or create) the database file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Self::from_pool(pool)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    /// Append to the audit log. Failures are reported, never propagated.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteStore {
        SqliteStore::from_pool(DbPool::in_memory().unwrap()).unwrap()
    }

    #[test]
    fn missing_key_is_none() {
        assert_eq!(store().get("entries").unwrap(), None);
    }

    #[test]
    fn set_overwrites() {
        let mut s = store();
        s.set("entries", "[1]").unwrap();
        s.set("entries", "[2]").unwrap();
        assert_eq!(s.get("entries").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn audit_rows_are_readable() {
        let s = store();
        s.audit("add", "#1", "Entry added");
        let rows = crate::db::log::load_log(&s.pool.conn).unwrap();
        assert!(rows.iter().any(|r| r.operation == "add" && r.target == "#1"));
    }
}
