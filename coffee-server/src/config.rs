//! Server configuration

use thiserror::Error;

/// Signing algorithm accepted from the issuer
pub const ALGORITHM: jsonwebtoken::Algorithm = jsonwebtoken::Algorithm::RS256;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// Maximum pooled database connections
    pub db_max_connections: u32,
    /// Listen host
    pub http_host: String,
    /// Listen port
    pub http_port: u16,
    /// Issuer domain, e.g. `tenant.us.auth0.com`
    pub auth0_domain: String,
    /// Audience identifier tokens must be issued for
    pub api_audience: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:coffee_shop.db".into()),
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 5)?,
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: parse_or("HTTP_PORT", 5000)?,
            auth0_domain: require("AUTH0_DOMAIN")?,
            api_audience: require("API_AUDIENCE")?,
        })
    }

    /// Expected `iss` claim
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.auth0_domain)
    }

    /// Where the issuer publishes its signing keys
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.auth0_domain)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn parse_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
