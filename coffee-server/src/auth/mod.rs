//! Authorization module
//!
//! - [`TokenValidator`] - bearer token extraction and verification against the issuer's keys
//! - [`KeySource`] - where signing keys come from ([`RemoteKeySet`], [`StaticKeySet`])
//! - [`require_permission`] - per-route permission gate middleware

pub mod error;
pub mod jwks;
pub mod middleware;
pub mod permissions;
pub mod token;

pub use error::AuthError;
pub use jwks::{KeySource, RemoteKeySet, StaticKeySet};
pub use middleware::require_permission;
pub use permissions::check_permissions;
pub use token::{Audience, Claims, TokenValidator};
