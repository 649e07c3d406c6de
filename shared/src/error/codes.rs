//! Error codes reported by the API
//!
//! Codes are grouped by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors (token and header validation)
//! - 2xxx: Permission errors
//! - 9xxx: System errors

use std::fmt;

/// Unified error code enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Request body missing, empty or not JSON
    BadRequest = 1,
    /// Request understood but the payload cannot be applied
    Unprocessable = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists (uniqueness constraint)
    AlreadyExists = 4,

    // ==================== 1xxx: Auth ====================
    /// No Authorization header
    AuthorizationHeaderMissing = 1001,
    /// Authorization header is not a single bearer token, or the token has no key id
    InvalidHeader = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Audience or issuer do not match
    InvalidClaims = 1004,
    /// Token cannot be decoded or its signature does not verify
    TokenUnparsable = 1005,
    /// No published signing key matches the token's key id
    SigningKeyNotFound = 1006,

    // ==================== 2xxx: Permission ====================
    /// Token carries no permissions claim
    PermissionsMissing = 2001,
    /// Required permission not granted
    PermissionDenied = 2002,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9001,
    /// Issuer key set could not be fetched
    KeySetUnavailable = 9002,
}

impl ErrorCode {
    /// Numeric value of the code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Machine-readable code used in auth error messages (`"<code>: <description>"`)
    pub fn wire_code(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Unprocessable => "unprocessable",
            Self::NotFound => "not_found",
            Self::AlreadyExists => "already_exists",
            Self::AuthorizationHeaderMissing => "authorization_header_missing",
            Self::InvalidHeader | Self::TokenUnparsable | Self::SigningKeyNotFound => {
                "invalid_header"
            }
            Self::TokenExpired => "token_expired",
            Self::InvalidClaims | Self::PermissionsMissing => "invalid_claims",
            Self::PermissionDenied => "unauthorized",
            Self::DatabaseError => "database_error",
            Self::KeySetUnavailable => "jwks_unavailable",
        }
    }

    /// Default human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::Unprocessable => "unprocessable",
            Self::NotFound => "not found",
            Self::AlreadyExists => "resource already exists",
            Self::AuthorizationHeaderMissing => "Authorization header is expected.",
            Self::InvalidHeader => "Authorization header must be bearer token.",
            Self::TokenExpired => "Token expired.",
            Self::InvalidClaims => "Incorrect claims. Please, check the audience and issuer.",
            Self::TokenUnparsable => "Unable to parse authentication token.",
            Self::SigningKeyNotFound => "Unable to find the appropriate key.",
            Self::PermissionsMissing => "Permissions not included in JWT.",
            Self::PermissionDenied => "Permission not found.",
            Self::DatabaseError => "database error",
            Self::KeySetUnavailable => "Unable to fetch signing keys.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_code())
    }
}
