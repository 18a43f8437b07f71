//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, authorizer setup, and the Axum server lifecycle.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::ItemRepository;
use crate::infrastructure::auth::HmacTokenAuthorizer;
use crate::infrastructure::persistence::{
    MemoryItemRepository, PgItemRepository, RedisItemRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Connects the item store selected by `config.store_backend`.
///
/// For PostgreSQL the backing table is created if missing.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or its table cannot be
/// prepared.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn ItemRepository>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory item store; data is lost on restart");
            Ok(Arc::new(MemoryItemRepository::new()))
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres store")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            let repository = PgItemRepository::new(Arc::new(pool), &config.table_name)?;
            repository
                .ensure_schema()
                .await
                .context("Failed to prepare item table")?;

            Ok(Arc::new(repository))
        }
        StoreBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis store")?;

            let repository = RedisItemRepository::connect(redis_url, &config.table_name)
                .await
                .context("Failed to connect to Redis")?;

            Ok(Arc::new(repository))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Item store (memory, PostgreSQL or Redis)
/// - HMAC bearer token authorizer
/// - Access policy
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_store(&config).await?;

    let authorizer = Arc::new(HmacTokenAuthorizer::new(
        config.token_signing_secret.clone(),
    ));

    let state = AppState::new(
        repository,
        config.primary_key.clone(),
        authorizer,
        config.access_policy(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
