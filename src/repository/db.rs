//! Database Connection and Setup
//!
//! Manages the SQLite connection backing the key-value store and its migrations.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Database state wrapper
///
/// The connection slot starts empty so the app can come up before the
/// database is ready; repositories report "not initialized" until then.
#[derive(Clone)]
pub struct DbState {
    pub conn: Arc<Mutex<Option<Connection>>>,
    pub path: PathBuf,
}

impl DbState {
    pub fn new(path: PathBuf) -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
            path,
        }
    }

    pub async fn is_initialized(&self) -> bool {
        self.conn.lock().await.is_some()
    }
}

/// Open the database at `db_path` (":memory:" for an in-memory database)
/// and run migrations
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    if db_path != Path::new(":memory:") {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = Connection::open(db_path)
        .map_err(|e| DomainError::Storage(format!("Failed to open database: {}", e)))?;

    run_migrations(&conn)?;

    let state = DbState::new(db_path.to_path_buf());
    *state.conn.lock().await = Some(conn);

    log::info!("Database ready at {}", db_path.display());
    Ok(state)
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    let Ok(mut stmt) = conn.prepare(&query) else {
        return false;
    };
    let Ok(mut rows) = stmt.query([]) else {
        return false;
    };
    while let Ok(Some(row)) = rows.next() {
        if let Ok(name) = row.get::<_, String>(1) {
            if name == column {
                return true;
            }
        }
    }
    false
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        )",
        [],
    )?;

    // Stores created before write timestamps were tracked
    if !column_exists(conn, "kv_store", "updated_at") {
        conn.execute(
            "ALTER TABLE kv_store ADD COLUMN updated_at INTEGER NOT NULL DEFAULT 0",
            [],
        )
        .map_err(|e| DomainError::Storage(format!("Failed to add updated_at: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_init_in_memory() {
        let state = init_db(Path::new(":memory:")).await.expect("init failed");
        assert!(state.is_initialized().await);

        let guard = state.conn.lock().await;
        let conn = guard.as_ref().unwrap();
        assert!(column_exists(conn, "kv_store", "updated_at"));
        assert!(!column_exists(conn, "kv_store", "missing"));
    }

    #[tokio::test]
    async fn test_migration_adds_timestamp_to_old_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("old.db");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute("CREATE TABLE kv_store (key TEXT PRIMARY KEY NOT NULL, value TEXT NOT NULL)", [])
                .unwrap();
            conn.execute("INSERT INTO kv_store (key, value) VALUES ('parentPin', '1234')", [])
                .unwrap();
        }

        let state = init_db(&path).await.unwrap();
        let guard = state.conn.lock().await;
        let conn = guard.as_ref().unwrap();
        assert!(column_exists(conn, "kv_store", "updated_at"));

        let value: String = conn
            .query_row("SELECT value FROM kv_store WHERE key = 'parentPin'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(value, "1234");
    }

    #[tokio::test]
    async fn test_init_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("brightspeak.db");
        init_db(&path).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_uninitialized_state() {
        let state = DbState::new(PathBuf::from("unused.db"));
        assert!(!state.is_initialized().await);
    }
}
