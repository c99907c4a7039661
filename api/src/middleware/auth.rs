//! Permissive bearer-token guard (§10.3).
//!
//! Absence of `api_key` in the router state disables the check entirely;
//! `/health` is never guarded so orchestrators can probe liveness without a
//! credential.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::router::RouterState;

pub async fn require_api_key(
    State(state): State<RouterState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = &state.api_key else {
        return Ok(next.run(request).await);
    };

    if request.uri().path() == "/health" {
        return Ok(next.run(request).await);
    }

    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match presented {
        Some(token) if token == expected.as_ref() => Ok(next.run(request).await),
        _ => Err(ApiError::new(common::GatewayError::InputInvalid("missing or invalid bearer token".to_string()))),
    }
}
