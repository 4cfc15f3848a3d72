//! Database schema and connection management

use crate::error::{PlayerError, Result};
use crate::DB_PATH_ENV_VAR;
use dirs::data_local_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Owned connection to the players database.
///
/// The connection closes when the value is dropped, so every early return
/// and error path releases it.
pub struct PlayerDatabase {
    pub(crate) conn: Connection,
}

impl PlayerDatabase {
    /// Open (or create) the database file at `path` and ensure the table exists
    pub fn open(path: &Path, busy_timeout: Duration) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.busy_timeout(busy_timeout)?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Private in-memory database, used by tests
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Resolve the database file: explicit path, then `PLAYER_DIRECTORY_DB`,
    /// then the platform data directory.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path);
        }
        if let Some(path) = std::env::var_os(DB_PATH_ENV_VAR).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        Self::default_path()
    }

    fn default_path() -> Result<PathBuf> {
        let data_dir = data_local_dir().ok_or_else(|| PlayerError::MissingDataDir {
            env_var: DB_PATH_ENV_VAR.to_string(),
        })?;
        Ok(data_dir.join("player-directory").join("players.db"))
    }

    /// Idempotently create the players table
    pub(crate) fn initialize_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                team TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}
