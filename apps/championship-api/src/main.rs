use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use championship_api::api::{build_router, AppState};
use championship_api::config::{Config, StorageBackend};
use championship_api::domain::repositories::{MatchRepository, TeamRepository};
use championship_api::infrastructure::repositories::{
    InMemoryMatchRepository, InMemoryTeamRepository, PostgresMatchRepository,
    PostgresTeamRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (RUST_LOG, defaults to info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!(storage = ?config.storage, "Configuration loaded");

    let (teams, matches): (Arc<dyn TeamRepository>, Arc<dyn MatchRepository>) =
        match config.storage {
            StorageBackend::Postgres => {
                let database_url = config
                    .database_url
                    .as_deref()
                    .context("DATABASE_URL not set")?;

                tracing::info!("Connecting to database...");
                let pool = PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .connect(database_url)
                    .await
                    .context("Failed to connect to database")?;

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to run migrations")?;
                tracing::info!("Database connected and migrated");

                (
                    Arc::new(PostgresTeamRepository::new(pool.clone())),
                    Arc::new(PostgresMatchRepository::new(pool)),
                )
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, data is lost on shutdown");
                (
                    Arc::new(InMemoryTeamRepository::new()),
                    Arc::new(InMemoryMatchRepository::new()),
                )
            }
        };

    let app = build_router(AppState::new(teams, matches));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
