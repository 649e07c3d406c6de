//! Shared types for the coffee shop service
//!
//! Drink models and their public/staff views, the unified error type with
//! its JSON envelope, and the success response bodies used by the API.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use axum::Json;
pub use error::{AppError, AppResult, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
