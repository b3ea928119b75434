//! Small persistent key/value store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension};
use scout_core::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, warn};

/// Persistent string key/value store, one row per key.
#[derive(Clone)]
pub struct LocalStore {
    db: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl LocalStore {
    /// Open the store in the platform data directory.
    pub fn open_default() -> Result<Self> {
        let project_dirs = ProjectDirs::from("com", "moviescout", "MovieScout")
            .ok_or_else(|| Error::Store("Failed to determine data directory".to_string()))?;

        Self::with_path(project_dirs.data_dir())
    }

    /// Open (or create) the store inside `dir`.
    pub fn with_path(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::Store(format!("Failed to create data directory: {e}")))?;

        let db_path = dir.join("local_storage.db");
        let db = Connection::open(&db_path)
            .map_err(|e| Error::Store(format!("Failed to open database: {e}")))?;
        Self::init(&db)?;

        info!("Local storage opened at {}", db_path.display());

        Ok(Self {
            db: Arc::new(Mutex::new(db)),
            path: Some(db_path),
        })
    }

    /// Store that lives only as long as the process.
    pub fn in_memory() -> Result<Self> {
        let db = Connection::open_in_memory()
            .map_err(|e| Error::Store(format!("Failed to open database: {e}")))?;
        Self::init(&db)?;

        Ok(Self {
            db: Arc::new(Mutex::new(db)),
            path: None,
        })
    }

    fn init(db: &Connection) -> Result<()> {
        db.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                stored_at TEXT NOT NULL
            );
            ",
        )
        .map_err(|e| Error::Store(format!("Failed to initialize database: {e}")))
    }

    /// Database file path, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Store a value, replacing any previous one.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let db = self.db.lock();
        db.execute(
            "INSERT OR REPLACE INTO local_storage (key, value, stored_at) VALUES (?, ?, ?)",
            rusqlite::params![key, value, Utc::now().to_rfc3339()],
        )
        .map_err(|e| Error::Store(format!("Failed to store {key}: {e}")))?;

        Ok(())
    }

    /// Read a value.
    pub fn get(&self, key: &str) -> Option<String> {
        let db = self.db.lock();
        db.query_row(
            "SELECT value FROM local_storage WHERE key = ?",
            [key],
            |row| row.get(0),
        )
        .optional()
        .unwrap_or_else(|e| {
            warn!("Failed to read {key} from local storage: {e}");
            None
        })
    }

    /// When a value was last written.
    pub fn stored_at(&self, key: &str) -> Option<DateTime<Utc>> {
        let db = self.db.lock();
        let raw: String = db
            .query_row(
                "SELECT stored_at FROM local_storage WHERE key = ?",
                [key],
                |row| row.get(0),
            )
            .ok()?;
        DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    /// Delete a value. Missing keys are not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        let db = self.db.lock();
        db.execute("DELETE FROM local_storage WHERE key = ?", [key])
            .map_err(|e| Error::Store(format!("Failed to remove {key}: {e}")))?;
        Ok(())
    }

    /// Store a value as JSON.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.set(key, &json)
    }

    /// Read a JSON value; unreadable values are logged and treated as absent.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        serde_json::from_str(&raw)
            .map_err(|e| warn!("Discarding unreadable {key} in local storage: {e}"))
            .ok()
    }

    /// Delete every value.
    pub fn clear(&self) -> Result<()> {
        let db = self.db.lock();
        db.execute("DELETE FROM local_storage", [])
            .map_err(|e| Error::Store(format!("Failed to clear local storage: {e}")))?;

        info!("Local storage cleared");
        Ok(())
    }
}

impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
