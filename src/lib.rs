//! Player Directory Library
//!
//! Create, read, update and delete players (name, age, team) stored in
//! SQLite, served over HTTP, plus a terminal client that drives the same API.
//!
//! ## Features
//!
//! - **Storage**: one `players` table with store-assigned IDs
//! - **Service**: per-operation connections on the blocking pool, with
//!   not-found checks before update and delete
//! - **HTTP API**: `/players/` routes built on axum
//! - **Terminal Client**: interactive menu over the HTTP API
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use player_directory::{server::{PlayerServer, ServerConfig}};
//!
//! # async fn example() -> player_directory::Result<()> {
//! let config = ServerConfig::with_db_path("players.db");
//! PlayerServer::new(config).run().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export PLAYER_DIRECTORY_DB=/var/lib/players.db
//! export PLAYER_DIRECTORY_URL=http://127.0.0.1:8000/players/
//! ```

pub mod cli;
pub mod client;
pub mod error;
pub mod server;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use cli::types::ids::PlayerId;
pub use error::{PlayerError, Result};
pub use service::PlayerService;
pub use storage::{NewPlayer, Player, PlayerUpdate};

pub const DB_PATH_ENV_VAR: &str = "PLAYER_DIRECTORY_DB";
pub const SERVICE_URL_ENV_VAR: &str = "PLAYER_DIRECTORY_URL";
