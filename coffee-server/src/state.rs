//! Application state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{RemoteKeySet, TokenValidator};
use crate::config::Config;
use crate::db::{DbService, RepoError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Bearer token validator
    pub validator: Arc<TokenValidator>,
}

impl AppState {
    /// Connect to the database, apply migrations and point the validator at the issuer
    pub async fn new(config: &Config) -> Result<Self, RepoError> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        db.migrate().await?;

        let validator = TokenValidator::new(
            Arc::new(RemoteKeySet::new(config.jwks_url())),
            config.api_audience.clone(),
            config.issuer(),
        );

        Ok(Self::with_parts(db.pool, validator))
    }

    pub fn with_parts(pool: SqlitePool, validator: TokenValidator) -> Self {
        Self {
            pool,
            validator: Arc::new(validator),
        }
    }
}
