//! Permission Definitions
//!
//! Scopes granted by the issuer and carried in the token's `permissions` claim.

use super::{AuthError, Claims};

/// Read drinks with full recipes
pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
pub const POST_DRINKS: &str = "post:drinks";
pub const PATCH_DRINKS: &str = "patch:drinks";
pub const DELETE_DRINKS: &str = "delete:drinks";

/// All scopes the API understands
pub const ALL_PERMISSIONS: &[&str] = &[GET_DRINKS_DETAIL, POST_DRINKS, PATCH_DRINKS, DELETE_DRINKS];

/// Check that the claims grant `permission`
pub fn check_permissions(permission: &str, claims: &Claims) -> Result<(), AuthError> {
    let granted = claims
        .permissions
        .as_ref()
        .ok_or(AuthError::PermissionsMissing)?;

    if granted.iter().any(|p| p == permission) {
        Ok(())
    } else {
        Err(AuthError::PermissionDenied)
    }
}
