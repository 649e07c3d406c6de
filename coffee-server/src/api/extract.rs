//! Lenient JSON body extractor

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::Value;

/// Request body parsed as JSON, regardless of `Content-Type`
///
/// `None` when the body is empty or not valid JSON; handlers decide which
/// status that deserves.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Option<Value>);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read request body");
                return Ok(Self(None));
            }
        };

        if bytes.is_empty() {
            return Ok(Self(None));
        }

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Self(Some(value))),
            Err(e) => {
                tracing::debug!(error = %e, "Request body is not valid JSON");
                Ok(Self(None))
            }
        }
    }
}
