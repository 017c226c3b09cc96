//! Mancala game server binary.

mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use mancala_server::{
    AppState, GamesRepository, InMemoryGamesRepository, SqliteGamesRepository, games_router,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            port,
            host,
            db_path,
            in_memory,
        } => serve(host, port, db_path, in_memory).await,
    }
}

/// Run the HTTP game server
async fn serve(host: String, port: u16, db_path: String, in_memory: bool) -> Result<()> {
    let games: Arc<dyn GamesRepository> = if in_memory {
        info!("Using in-memory games repository");
        Arc::new(InMemoryGamesRepository::new())
    } else {
        // DATABASE_URL (e.g. from .env) takes precedence over the CLI default
        let db_path = std::env::var("DATABASE_URL").unwrap_or(db_path);
        let repository = SqliteGamesRepository::new(db_path)?;
        repository.run_migrations()?;
        Arc::new(repository)
    };

    let app = games_router(AppState::new(games));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!(%host, port, "Mancala server ready at http://{}:{}/api/v1/games", host, port);

    axum::serve(listener, app).await?;

    Ok(())
}
