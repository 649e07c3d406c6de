//! Issuer signing keys
//!
//! Keys are looked up on every verification; nothing is cached.

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;

use super::AuthError;

/// Source of the issuer's published JSON Web Key Set
#[async_trait]
pub trait KeySource: Send + Sync {
    async fn key_set(&self) -> Result<JwkSet, AuthError>;
}

/// Fetches the key set from the issuer's well-known endpoint
#[derive(Debug, Clone)]
pub struct RemoteKeySet {
    client: reqwest::Client,
    url: String,
}

impl RemoteKeySet {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl KeySource for RemoteKeySet {
    async fn key_set(&self) -> Result<JwkSet, AuthError> {
        let unavailable = |e: reqwest::Error| {
            tracing::error!(url = %self.url, error = %e, "Failed to fetch issuer key set");
            AuthError::KeySetUnavailable(e.to_string())
        };

        self.client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(unavailable)?
            .json::<JwkSet>()
            .await
            .map_err(unavailable)
    }
}

/// Fixed key set, for tests and deployments with pinned keys
#[derive(Debug, Clone)]
pub struct StaticKeySet(JwkSet);

impl StaticKeySet {
    pub fn new(keys: JwkSet) -> Self {
        Self(keys)
    }
}

#[async_trait]
impl KeySource for StaticKeySet {
    async fn key_set(&self) -> Result<JwkSet, AuthError> {
        Ok(self.0.clone())
    }
}
