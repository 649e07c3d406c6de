//! coffee-server - drinks menu API
//!
//! Serves the public menu and lets staff holding scoped bearer tokens
//! manage drinks.

use anyhow::Context;
use clap::Parser;

use coffee_server::db::DbService;
use coffee_server::{AppState, Config, api};

#[derive(Debug, Parser)]
#[command(name = "coffee-server", version, about = "Coffee shop drinks API")]
struct Cli {
    /// Drop and recreate all tables before serving. All records are lost.
    #[arg(long, env = "RESET_DB")]
    reset_db: bool,

    /// Insert the sample drink if it is not present
    #[arg(long, env = "SEED_DB")]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coffee_server=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Invalid configuration")?;

    tracing::info!(
        database = %config.database_url,
        issuer = %config.issuer(),
        audience = %config.api_audience,
        "Starting coffee-server"
    );

    // Initialize application state (connects and migrates)
    let state = AppState::new(&config)
        .await
        .context("Failed to initialize application state")?;

    let db = DbService {
        pool: state.pool.clone(),
    };
    if cli.reset_db {
        db.reset().await.context("Failed to reset database")?;
    }
    if cli.seed {
        db.seed().await.context("Failed to seed database")?;
    }

    let app = api::build_app(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("coffee-server HTTP listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("coffee-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
