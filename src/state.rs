use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::AppConfig;

/// Shared handle to the connection pool and configuration.
///
/// Built once at process startup and passed into every store call; there is
/// no global instance. `Clone` is cheap, the pool is internally shared.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Self::with_config(config).await
    }

    /// Build the pool from an already loaded configuration. Callers acquiring
    /// a connection block up to the acquire timeout when the pool is
    /// exhausted.
    pub async fn with_config(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(config.pool.max_connections)
            .min_connections(config.pool.min_connections)
            .idle_timeout(Duration::from_secs(config.pool.idle_timeout_secs))
            .acquire_timeout(Duration::from_secs(config.pool.acquire_timeout_secs))
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        info!(
            max_connections = config.pool.max_connections,
            min_connections = config.pool.min_connections,
            "connection pool initialized"
        );
        Ok(Self { db, config })
    }

    /// Close the pool at shutdown. Draining pending operations first is the
    /// caller's responsibility; there is no automatic graceful drain.
    pub async fn close(&self) {
        self.db.close().await;
        info!("connection pool closed");
    }
}
