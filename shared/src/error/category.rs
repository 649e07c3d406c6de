//! Error category classification

use super::codes::ErrorCode;

/// Error category derived from the code range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    /// Category this code belongs to
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// Whether failures with this code come from token or permission checks
    pub fn is_auth(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Auth | ErrorCategory::Permission
        ) || *self == Self::KeySetUnavailable
    }
}
