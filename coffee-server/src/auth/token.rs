//! Bearer token validation
//!
//! Tokens are RS256 JWTs signed by the external issuer. The signing key is
//! picked from the issuer's key set by the `kid` in the token header.

use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, Validation, decode, decode_header};
use serde::{Deserialize, Serialize};

use super::{AuthError, KeySource};
use crate::config::ALGORITHM;

/// `aud` may be a single string or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

/// Decoded token payload
///
/// Registered claims default when absent so that the validator, not the
/// deserializer, reports them missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub iss: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Audience>,
    #[serde(default)]
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

/// Verifies bearer tokens against the issuer's published keys
pub struct TokenValidator {
    keys: Arc<dyn KeySource>,
    audience: String,
    issuer: String,
}

impl TokenValidator {
    pub fn new(keys: Arc<dyn KeySource>, audience: String, issuer: String) -> Self {
        Self {
            keys,
            audience,
            issuer,
        }
    }

    /// Extract the token from an `Authorization` header value
    ///
    /// The header must be exactly `Bearer <token>`; the scheme is matched
    /// case-insensitively.
    pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
        let header = match header {
            Some(h) if !h.is_empty() => h,
            _ => return Err(AuthError::HeaderMissing),
        };

        let parts: Vec<&str> = header.split_whitespace().collect();
        match parts.as_slice() {
            [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => Err(AuthError::NotBearer),
            [] => Err(AuthError::NotBearer),
            [_] => Err(AuthError::TokenMissing),
            [_, token] => Ok(*token),
            _ => Err(AuthError::NotSingleToken),
        }
    }

    /// Verify signature, expiry, audience and issuer; return the claims
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::Unparsable)?;
        let kid = header.kid.ok_or(AuthError::KeyIdMissing)?;

        let key_set = self.keys.key_set().await?;
        let jwk = key_set.find(&kid).ok_or(AuthError::KeyNotFound)?;
        let key = DecodingKey::from_jwk(jwk).map_err(|e| {
            tracing::warn!(kid = %kid, error = %e, "Published key is not usable");
            AuthError::KeyNotFound
        })?;

        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        decode::<Claims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                ErrorKind::InvalidAudience
                | ErrorKind::InvalidIssuer
                | ErrorKind::MissingRequiredClaim(_) => AuthError::IncorrectClaims,
                _ => AuthError::Unparsable,
            })
    }

    /// Extract and verify the bearer token of a request
    pub async fn authenticate(&self, header: Option<&str>) -> Result<Claims, AuthError> {
        let token = Self::bearer_token(header)?;
        self.verify(token).await
    }
}
