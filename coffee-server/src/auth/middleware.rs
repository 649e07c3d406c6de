//! Permission gate middleware
//!
//! Wraps a route group so that only requests carrying a valid bearer token
//! with the required scope reach the handler.

use std::future::Future;
use std::pin::Pin;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::error::AppError;

use super::{AuthError, check_permissions};
use crate::security_log;
use crate::state::AppState;

/// Require a verified token granting `permission`
///
/// On success the [`Claims`](super::Claims) are inserted into the request
/// extensions before the handler runs.
///
/// # Usage
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/drinks", post(handler::create))
///     .route_layer(middleware::from_fn_with_state(state, require_permission("post:drinks")));
/// ```
///
/// # Errors
///
/// | Failure | Status |
/// |---------|--------|
/// | header missing or malformed | 401 |
/// | token expired, wrong audience or issuer | 401 |
/// | token unparsable, no matching key | 400 |
/// | `permissions` claim missing | 400 |
/// | permission not granted | 403 |
/// | key set unreachable | 503 |
pub fn require_permission(
    permission: &'static str,
) -> impl Fn(
    State<AppState>,
    Request,
    Next,
) -> Pin<Box<dyn Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |State(state): State<AppState>, mut req: Request, next: Next| {
        Box::pin(async move {
            let claims = match authorization_header(&req) {
                Ok(header) => state.validator.authenticate(header.as_deref()).await,
                Err(e) => Err(e),
            };

            let claims = match claims {
                Ok(claims) => claims,
                Err(e) => {
                    security_log!(
                        "WARN",
                        "auth_failed",
                        error = e.to_string(),
                        uri = req.uri().to_string()
                    );
                    return Err(e.into());
                }
            };

            if let Err(e) = check_permissions(permission, &claims) {
                security_log!(
                    "WARN",
                    "permission_denied",
                    subject = claims.sub.clone().unwrap_or_default(),
                    required_permission = permission,
                    error = e.to_string()
                );
                return Err(e.into());
            }

            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        })
    }
}

/// Raw `Authorization` value; a value that is not visible ASCII cannot be a bearer token
fn authorization_header(req: &Request) -> Result<Option<String>, AuthError> {
    match req.headers().get(http::header::AUTHORIZATION) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(|v| Some(v.to_owned()))
            .map_err(|_| AuthError::NotBearer),
    }
}
