//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::server::config::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_HOST, DEFAULT_PORT};

/// Arguments for running the HTTP service
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind to.
    #[clap(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[clap(long, short, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SQLite database file (or set `PLAYER_DIRECTORY_DB` env var).
    #[clap(long)]
    pub db: Option<PathBuf>,

    /// How long a statement waits on a locked database before failing.
    #[clap(long, default_value_t = DEFAULT_BUSY_TIMEOUT_MS)]
    pub busy_timeout_ms: u64,

    /// Delete every stored player before accepting requests
    #[clap(long)]
    pub clear_db: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "player-directory", about = "Player directory service and terminal client")]
pub struct PlayerDirectory {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the players API over HTTP
    Serve {
        #[clap(flatten)]
        args: ServeArgs,
    },

    /// Interactive terminal menu that drives a running service.
    Menu {
        /// Base URL of the players collection (or set `PLAYER_DIRECTORY_URL` env var).
        #[clap(long, short)]
        url: Option<String>,
    },
}
