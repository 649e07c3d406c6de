//! API Response types
//!
//! Every successful response carries `"success": true`:
//! ```json
//! { "success": true, "drinks": [ ... ] }
//! { "success": true, "delete": 7 }
//! ```

use serde::{Deserialize, Serialize};

/// List of drinks, in either view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinksResponse<T> {
    pub success: bool,
    pub drinks: Vec<T>,
}

impl<T> DrinksResponse<T> {
    pub fn new(drinks: Vec<T>) -> Self {
        Self {
            success: true,
            drinks,
        }
    }

    /// Response holding a single drink
    pub fn single(drink: T) -> Self {
        Self::new(vec![drink])
    }
}

/// Confirmation of a deleted drink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub delete: i64,
}

impl DeleteResponse {
    pub fn new(id: i64) -> Self {
        Self {
            success: true,
            delete: id,
        }
    }
}
