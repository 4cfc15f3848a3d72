//! Player statements and row mapping

use super::{models::*, schema::PlayerDatabase};
use crate::{PlayerId, Result};
use rusqlite::{params, Row};

const SELECT_PLAYER: &str = "SELECT id, name, age, team FROM players";

impl PlayerDatabase {
    /// All players in storage order
    pub fn list_players(&self) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(SELECT_PLAYER)?;
        let rows = stmt.query_map([], Self::row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Point lookup by ID
    pub fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_PLAYER} WHERE id = ?"))?;

        match stmt.query_row(params![id.as_i64()], Self::row_to_player) {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Players whose team matches exactly (case-sensitive)
    pub fn get_players_by_team(&self, team: &str) -> Result<Vec<Player>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_PLAYER} WHERE team = ?"))?;
        let rows = stmt.query_map(params![team], Self::row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Insert a player and return it with the assigned ID
    pub fn insert_player(&self, player: &NewPlayer) -> Result<Player> {
        self.conn.execute(
            "INSERT INTO players (name, age, team) VALUES (?, ?, ?)",
            params![player.name, player.age, player.team],
        )?;
        let id = PlayerId::new(self.conn.last_insert_rowid());
        Ok(player.clone().with_id(id))
    }

    /// Write all three data fields of `player` back in one statement.
    /// Returns the number of rows changed.
    pub fn update_player(&self, player: &Player) -> Result<usize> {
        let rows_affected = self.conn.execute(
            "UPDATE players SET name = ?, age = ?, team = ? WHERE id = ?",
            params![player.name, player.age, player.team, player.id.as_i64()],
        )?;
        Ok(rows_affected)
    }

    pub fn delete_player(&self, id: PlayerId) -> Result<usize> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM players WHERE id = ?", params![id.as_i64()])?;
        Ok(rows_affected)
    }

    /// Remove every player. IDs are not reused afterwards.
    pub fn clear_players(&self) -> Result<usize> {
        let rows_affected = self.conn.execute("DELETE FROM players", [])?;
        Ok(rows_affected)
    }

    fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
        Ok(Player {
            id: PlayerId::new(row.get(0)?),
            name: row.get(1)?,
            age: row.get(2)?,
            team: row.get(3)?,
        })
    }
}
