//! Player operations on top of the storage layer.
//!
//! Every operation opens its own [`PlayerDatabase`] on the blocking thread
//! pool and drops it before returning, so slow statements never hold up
//! unrelated requests and no connection outlives the call that opened it.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::server::config::ServerConfig;
use crate::storage::{DeleteConfirmation, NewPlayer, Player, PlayerDatabase, PlayerUpdate};
use crate::{PlayerError, PlayerId, Result};

/// Handle to the players store, cheap to clone into request handlers
#[derive(Debug, Clone)]
pub struct PlayerService {
    db_path: Arc<PathBuf>,
    busy_timeout: Duration,
}

impl PlayerService {
    pub fn new(db_path: impl Into<PathBuf>, busy_timeout: Duration) -> Self {
        Self {
            db_path: Arc::new(db_path.into()),
            busy_timeout,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            config.db_path.clone(),
            Duration::from_millis(config.busy_timeout_ms),
        )
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Create the database file and table if they do not exist yet
    pub async fn initialize(&self) -> Result<()> {
        self.with_db(|_| Ok(())).await
    }

    pub async fn list_players(&self) -> Result<Vec<Player>> {
        let players = self.with_db(|db| db.list_players()).await?;
        tracing::debug!(count = players.len(), "listed players");
        Ok(players)
    }

    pub async fn get_player(&self, id: PlayerId) -> Result<Player> {
        self.with_db(move |db| db.get_player(id))
            .await?
            .ok_or(PlayerError::PlayerNotFound { id })
    }

    /// Players on `team`. Unlike [`list_players`](Self::list_players), an
    /// empty result is reported as [`PlayerError::TeamNotFound`].
    pub async fn get_players_by_team(&self, team: &str) -> Result<Vec<Player>> {
        let team = team.to_string();
        self.with_db(move |db| {
            let players = db.get_players_by_team(&team)?;
            if players.is_empty() {
                return Err(PlayerError::TeamNotFound { team });
            }
            Ok(players)
        })
        .await
    }

    pub async fn create_player(&self, player: NewPlayer) -> Result<Player> {
        let created = self.with_db(move |db| db.insert_player(&player)).await?;
        tracing::info!(id = %created.id, team = %created.team, "created player");
        Ok(created)
    }

    /// Read the player, merge the supplied fields and write all of them
    /// back. Nothing is written when the ID does not exist.
    pub async fn update_player(&self, id: PlayerId, update: PlayerUpdate) -> Result<Player> {
        let updated = self
            .with_db(move |db| {
                let existing = db
                    .get_player(id)?
                    .ok_or(PlayerError::PlayerNotFound { id })?;
                let merged = update.apply_to(&existing);
                db.update_player(&merged)?;
                Ok(merged)
            })
            .await?;
        tracing::info!(id = %id, "updated player");
        Ok(updated)
    }

    /// Look the player up, then delete it in a separate statement.
    pub async fn delete_player(&self, id: PlayerId) -> Result<DeleteConfirmation> {
        self.with_db(move |db| {
            if db.get_player(id)?.is_none() {
                return Err(PlayerError::PlayerNotFound { id });
            }
            db.delete_player(id)?;
            Ok(())
        })
        .await?;
        tracing::info!(id = %id, "deleted player");
        Ok(DeleteConfirmation::for_player(id))
    }

    /// Delete every player, returning how many were removed
    pub async fn clear_players(&self) -> Result<usize> {
        let removed = self.with_db(|db| db.clear_players()).await?;
        tracing::warn!(removed, "cleared players table");
        Ok(removed)
    }

    async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&PlayerDatabase) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = Arc::clone(&self.db_path);
        let busy_timeout = self.busy_timeout;

        tokio::task::spawn_blocking(move || {
            let db = PlayerDatabase::open(&path, busy_timeout)?;
            op(&db)
        })
        .await?
    }
}
