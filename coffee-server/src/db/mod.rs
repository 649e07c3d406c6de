//! Database Module
//!
//! Handles the SQLite connection pool, migrations and the opt-in
//! reset/seed maintenance steps.

pub mod drink;

use std::str::FromStr;

use shared::error::AppError;
use shared::models::{DrinkCreate, Ingredient, Recipe};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.message().to_string())
            }
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for RepoError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        RepoError::Database(format!("Failed to apply migrations: {err}"))
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => {
                tracing::debug!(%msg, "Record not found");
                AppError::not_found()
            }
            RepoError::Duplicate(msg) => {
                tracing::debug!(%msg, "Uniqueness constraint violated");
                AppError::already_exists()
            }
            RepoError::Validation(msg) => {
                tracing::debug!(%msg, "Record failed validation");
                AppError::unprocessable()
            }
            RepoError::Serialization(e) => {
                tracing::warn!(error = %e, "Stored record could not be (de)serialized");
                AppError::unprocessable()
            }
            RepoError::Database(msg) => {
                tracing::error!(%msg, "Database error");
                AppError::database()
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Database service, owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (creating if missing) the database at `url`
    pub async fn new(url: &str, max_connections: u32) -> RepoResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| RepoError::Database(format!("Invalid database url: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open database: {e}")))?;

        tracing::info!("Database connection established ({url})");
        Ok(Self { pool })
    }

    /// Private in-memory database on a single connection that never expires
    pub async fn in_memory() -> RepoResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self { pool })
    }

    /// Apply pending migrations (idempotent)
    pub async fn migrate(&self) -> RepoResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    /// Drop every table and rebuild the schema. All records are lost.
    pub async fn reset(&self) -> RepoResult<()> {
        tracing::warn!("Dropping all tables and recreating the schema");
        sqlx::query("DROP TABLE IF EXISTS drink")
            .execute(&self.pool)
            .await?;
        sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
            .execute(&self.pool)
            .await?;
        self.migrate().await
    }

    /// Insert the sample drink unless a drink with that title exists
    pub async fn seed(&self) -> RepoResult<()> {
        let sample = DrinkCreate {
            title: "water".to_string(),
            recipe: Recipe(vec![Ingredient {
                name: "water".to_string(),
                color: "blue".to_string(),
                parts: 1,
            }]),
        };

        match drink::create(&self.pool, sample).await {
            Ok(d) => {
                tracing::info!(id = d.id, "Seeded sample drink");
                Ok(())
            }
            Err(RepoError::Duplicate(_)) => {
                tracing::info!("Sample drink already present, skipping seed");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
