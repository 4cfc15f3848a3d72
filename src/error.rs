//! Error types for the player directory

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::PlayerId;

pub type Result<T> = std::result::Result<T, PlayerError>;

#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("Player {id} not found")]
    PlayerNotFound { id: PlayerId },

    #[error("No players found for team {team}")]
    TeamNotFound { team: String },

    #[error("Invalid request: {message}")]
    Validation { message: String },

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server responded with {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid service URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("Could not determine a data directory; set {env_var} or pass --db")]
    MissingDataDir { env_var: String },
}

impl PlayerError {
    /// HTTP status reported to callers of the service.
    pub fn status_code(&self) -> StatusCode {
        match self {
            PlayerError::PlayerNotFound { .. } | PlayerError::TeamNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            PlayerError::Validation { .. } | PlayerError::InvalidPlayerId(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            PlayerError::Api { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == StatusCode::NOT_FOUND
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        PlayerError::Validation {
            message: message.into(),
        }
    }
}

/// Message sent in place of server-side error details.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&PlayerError> for ErrorResponse {
    /// 5xx bodies carry a generic message; the details only go to the log.
    fn from(err: &PlayerError) -> Self {
        let status = err.status_code();
        let error = if status.is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            err.to_string()
        };
        Self {
            code: status.as_u16(),
            error,
        }
    }
}

impl IntoResponse for PlayerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
