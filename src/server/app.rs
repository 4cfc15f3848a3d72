//! # HTTP Server
//!
//! Combines the player and health routers and runs them on a tokio listener.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::config::ServerConfig;
use super::routes::{health_routes, player_routes};
use crate::service::PlayerService;
use crate::Result;

/// HTTP server for the player directory
pub struct PlayerServer {
    config: ServerConfig,
    service: PlayerService,
}

impl PlayerServer {
    pub fn new(config: ServerConfig) -> Self {
        let service = PlayerService::from_config(&config);
        Self { config, service }
    }

    pub fn service(&self) -> &PlayerService {
        &self.service
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Build the combined router
    pub fn router(&self) -> Router {
        Router::new()
            .merge(health_routes())
            .merge(player_routes(self.service.clone()))
            .layer(TraceLayer::new_for_http())
    }

    /// Bind the configured address and serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.socket_addr()).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.service.initialize().await?;

        let addr = listener.local_addr()?;
        tracing::info!("Player directory listening on http://{}", addr);
        tracing::info!("Database: {}", self.service.db_path().display());

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
