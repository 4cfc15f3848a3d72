//! Data models for the storage layer

use crate::cli::types::ids::PlayerId;
use serde::{Deserialize, Serialize};

/// Player record as stored in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub age: i64,
    pub team: String,
}

/// Fields required to create a player. The store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub age: i64,
    pub team: String,
}

impl NewPlayer {
    pub fn new(name: impl Into<String>, age: i64, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            team: team.into(),
        }
    }

    /// Attach the store-assigned ID.
    pub fn with_id(self, id: PlayerId) -> Player {
        Player {
            id,
            name: self.name,
            age: self.age,
            team: self.team,
        }
    }
}

/// Partial update. `None` means the caller did not supply the field;
/// `Some` always overwrites, even with `""` or `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

impl PlayerUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn age(age: i64) -> Self {
        Self {
            age: Some(age),
            ..Default::default()
        }
    }

    pub fn team(team: impl Into<String>) -> Self {
        Self {
            team: Some(team.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.team.is_none()
    }

    /// Merge the supplied fields over `existing`.
    pub fn apply_to(&self, existing: &Player) -> Player {
        Player {
            id: existing.id,
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            age: self.age.unwrap_or(existing.age),
            team: self.team.clone().unwrap_or_else(|| existing.team.clone()),
        }
    }
}

/// Confirmation returned after a delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn for_player(id: PlayerId) -> Self {
        Self {
            message: format!("Player {} deleted successfully", id),
        }
    }
}
