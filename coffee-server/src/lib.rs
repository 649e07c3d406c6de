//! Coffee shop drinks API
//!
//! Serves the drink menu to the public (short view) and to staff holding
//! scoped bearer tokens from an external issuer (long view, mutations).
//!
//! ```text
//! coffee-server/src/
//! ├── config.rs      # environment configuration
//! ├── state.rs       # shared application state
//! ├── auth/          # bearer token validation, permission gate
//! ├── db/            # SQLite pool, migrations, drink repository
//! └── api/           # HTTP routes and handlers
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod state;

pub use config::Config;
pub use state::AppState;

// Security logging macro - auth failures go to the "security" target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::warn!(
            target: "security",
            level = $level,
            event = $event,
            timestamp = chrono::Local::now().to_rfc3339(),
            $($key = $value),*
        );
    };
}
