//! Authorization failures
//!
//! Every variant carries an HTTP status and a `code`/`description` pair via
//! [`ErrorCode`]; the description is the variant's display text.

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Authorization header is expected.")]
    HeaderMissing,

    #[error("Authorization header must start with \"Bearer\".")]
    NotBearer,

    #[error("Token not found.")]
    TokenMissing,

    #[error("Authorization header must be bearer token.")]
    NotSingleToken,

    #[error("Authorization malformed.")]
    KeyIdMissing,

    #[error("Token expired.")]
    Expired,

    #[error("Incorrect claims. Please, check the audience and issuer.")]
    IncorrectClaims,

    #[error("Unable to parse authentication token.")]
    Unparsable,

    #[error("Unable to find the appropriate key.")]
    KeyNotFound,

    #[error("Unable to fetch signing keys.")]
    KeySetUnavailable(String),

    #[error("Permissions not included in JWT.")]
    PermissionsMissing,

    #[error("Permission not found.")]
    PermissionDenied,
}

impl AuthError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::HeaderMissing => ErrorCode::AuthorizationHeaderMissing,
            Self::NotBearer | Self::TokenMissing | Self::NotSingleToken | Self::KeyIdMissing => {
                ErrorCode::InvalidHeader
            }
            Self::Expired => ErrorCode::TokenExpired,
            Self::IncorrectClaims => ErrorCode::InvalidClaims,
            Self::Unparsable => ErrorCode::TokenUnparsable,
            Self::KeyNotFound => ErrorCode::SigningKeyNotFound,
            Self::KeySetUnavailable(_) => ErrorCode::KeySetUnavailable,
            Self::PermissionsMissing => ErrorCode::PermissionsMissing,
            Self::PermissionDenied => ErrorCode::PermissionDenied,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::auth(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    fn render(err: AuthError) -> (StatusCode, String) {
        let app: AppError = err.into();
        (app.http_status(), app.message)
    }

    #[test]
    fn test_header_errors() {
        assert_eq!(
            render(AuthError::HeaderMissing),
            (
                StatusCode::UNAUTHORIZED,
                "authorization_header_missing: Authorization header is expected.".to_string()
            )
        );
        assert_eq!(
            render(AuthError::NotBearer),
            (
                StatusCode::UNAUTHORIZED,
                "invalid_header: Authorization header must start with \"Bearer\".".to_string()
            )
        );
        assert_eq!(
            render(AuthError::TokenMissing).0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            render(AuthError::NotSingleToken).1,
            "invalid_header: Authorization header must be bearer token."
        );
    }

    #[test]
    fn test_token_errors() {
        assert_eq!(
            render(AuthError::Expired),
            (StatusCode::UNAUTHORIZED, "token_expired: Token expired.".to_string())
        );
        assert_eq!(render(AuthError::IncorrectClaims).0, StatusCode::UNAUTHORIZED);
        assert_eq!(render(AuthError::Unparsable).0, StatusCode::BAD_REQUEST);
        assert_eq!(
            render(AuthError::KeyNotFound).1,
            "invalid_header: Unable to find the appropriate key."
        );
        assert_eq!(
            render(AuthError::KeySetUnavailable("connection refused".into())),
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "jwks_unavailable: Unable to fetch signing keys.".to_string()
            )
        );
    }

    #[test]
    fn test_permission_errors() {
        assert_eq!(
            render(AuthError::PermissionsMissing),
            (
                StatusCode::BAD_REQUEST,
                "invalid_claims: Permissions not included in JWT.".to_string()
            )
        );
        assert_eq!(
            render(AuthError::PermissionDenied),
            (
                StatusCode::FORBIDDEN,
                "unauthorized: Permission not found.".to_string()
            )
        );
    }
}
