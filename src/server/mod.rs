//! HTTP transport for the player directory
//!
//! - `config`: bind address and storage settings
//! - `routes`: `/players` handlers and `/health`
//! - `app`: router assembly and the serve loop

pub mod app;
pub mod config;
pub mod routes;

pub use app::PlayerServer;
pub use config::ServerConfig;
