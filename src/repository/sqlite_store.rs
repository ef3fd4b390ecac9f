//! SQLite Key-Value Store
//!
//! Persists each key as one row of `kv_store`; every write replaces the row.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::traits::KeyValueStore;
use crate::domain::{DomainError, DomainResult};

pub struct SqliteKvStore {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl SqliteKvStore {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    fn not_initialized() -> DomainError {
        DomainError::Internal("Database not initialized".to_string())
    }
}

#[async_trait]
impl KeyValueStore for SqliteKvStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(Self::not_initialized)?;

        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(Self::not_initialized)?;

        let now = chrono::Local::now().timestamp_millis();
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(Self::not_initialized)?;

        conn.execute("DELETE FROM kv_store WHERE key = ?", params![key])?;
        Ok(())
    }
}
