//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            Self::BadRequest
            | Self::TokenUnparsable
            | Self::SigningKeyNotFound
            | Self::PermissionsMissing => StatusCode::BAD_REQUEST,

            // 401 Unauthorized
            Self::AuthorizationHeaderMissing
            | Self::InvalidHeader
            | Self::TokenExpired
            | Self::InvalidClaims => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied => StatusCode::FORBIDDEN,

            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,

            // 503 Service Unavailable (issuer unreachable, client can retry)
            Self::KeySetUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
