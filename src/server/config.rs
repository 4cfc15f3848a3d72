//! HTTP Server Configuration
//!
//! Bind address, database location and storage timeouts for the service.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::ServeArgs;
use crate::storage::PlayerDatabase;
use crate::Result;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite database file
    pub db_path: PathBuf,

    /// Milliseconds a statement waits on a locked database (default: 5000)
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

impl ServerConfig {
    /// Config with default host, port and timeout for the given database file
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            db_path: db_path.into(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }

    /// Build from CLI arguments, resolving the database path
    pub fn from_args(args: &ServeArgs) -> Result<Self> {
        Ok(Self {
            host: args.host.clone(),
            port: args.port,
            db_path: PlayerDatabase::resolve_path(args.db.clone())?,
            busy_timeout_ms: args.busy_timeout_ms,
        })
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
