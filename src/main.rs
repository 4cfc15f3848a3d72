//! Entry point: parse CLI and dispatch to the server or the terminal menu.

use anyhow::Context;
use clap::Parser;
use player_directory::{
    cli::{Commands, PlayerDirectory, ServeArgs},
    client::{resolve_service_url, Menu, PlayerApiClient},
    server::{PlayerServer, ServerConfig},
};
use tracing_subscriber::{fmt, EnvFilter};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = PlayerDirectory::parse();

    match app.command {
        Commands::Serve { args } => serve(args).await?,
        Commands::Menu { url } => {
            let url = resolve_service_url(url);
            let api = PlayerApiClient::new(&url)
                .with_context(|| format!("invalid service URL {url}"))?;
            let stdin = std::io::stdin();
            let mut menu = Menu::new(api, stdin.lock(), std::io::stdout());
            menu.run().await.context("terminal menu failed")?;
        }
    }

    Ok(())
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,player_directory=debug,tower_http=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = ServerConfig::from_args(&args).context("failed to resolve configuration")?;
    let server = PlayerServer::new(config);

    if args.clear_db {
        server
            .service()
            .clear_players()
            .await
            .context("failed to clear the players table")?;
    }

    server.run().await.context("server error")?;
    Ok(())
}
