//! HTTP API
//!
//! | Route | Permission |
//! |-------|------------|
//! | `GET /drinks` | public |
//! | `GET /drinks-detail` | `get:drinks-detail` |
//! | `POST /drinks` | `post:drinks` |
//! | `PATCH /drinks/{id}` | `patch:drinks` |
//! | `DELETE /drinks/{id}` | `delete:drinks` |
//! | `GET /health` | public |

pub mod drinks;
pub mod extract;
pub mod health;

use axum::Router;
use http::HeaderName;
use shared::error::AppError;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build a router with all routes registered (no outer middleware, no state)
pub fn build_router(state: &AppState) -> Router<AppState> {
    Router::new()
        // Drinks API - per-route permissions
        .merge(drinks::router(state))
        // Health API - public route
        .merge(health::router())
        .fallback(fallback)
}

/// Build the fully configured application
///
/// Used by both the HTTP server and oneshot calls in tests
pub fn build_app(state: AppState) -> Router {
    build_router(&state)
        // CORS - any origin
        .layer(CorsLayer::permissive())
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - echo on the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, generated unless the client sent one
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
        .with_state(state)
}

async fn fallback() -> AppError {
    AppError::not_found()
}
