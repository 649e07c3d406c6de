//! Unified error system for the coffee shop service
//!
//! - [`ErrorCode`]: every failure the API can report
//! - [`ErrorCategory`]: classification of codes by domain
//! - [`AppError`]: error value carried through handlers, rendered as the
//!   `{success, error, message}` envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::not_found();
//! assert_eq!(err.message, "not found");
//!
//! let err = AppError::auth(ErrorCode::TokenExpired, "Token expired.");
//! assert_eq!(err.message, "token_expired: Token expired.");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorBody};
