//! Key-value area persisted in the `kv` table of the SQLite database.

use crate::errors::{AppError, AppResult};
use crate::storage::kv::KeyValueStore;
use crate::storage::log::ttlog;
use crate::storage::pool::DbPool;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub struct SqliteKv {
    pool: DbPool,
    quota: usize,
}

impl SqliteKv {
    /// Wrap an already-migrated database.
    pub fn new(pool: DbPool, quota: usize) -> Self {
        Self { pool, quota }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn used_bytes(&self) -> AppResult<usize> {
        let used: i64 = self.pool.conn.query_row(
            "SELECT IFNULL(SUM(LENGTH(CAST(key AS BLOB)) + LENGTH(CAST(value AS BLOB))), 0) FROM kv",
            [],
            |row| row.get(0),
        )?;
        Ok(used as usize)
    }
}

impl KeyValueStore for SqliteKv {
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
        let tx = self.pool.conn.transaction()?;

        let others: i64 = tx.query_row(
            "SELECT IFNULL(SUM(LENGTH(CAST(key AS BLOB)) + LENGTH(CAST(value AS BLOB))), 0)
             FROM kv WHERE key <> ?1",
            [key],
            |row| row.get(0),
        )?;
        let others = others as usize;
        let needed = key.len() + value.len();

        if others + needed > self.quota {
            // dropping `tx` rolls back
            return Err(AppError::QuotaExceeded {
                needed,
                quota: self.quota.saturating_sub(others),
            });
        }

        tx.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            tracing::warn!(error = %e, operation, "failed to write internal log");
        }
    }
}
