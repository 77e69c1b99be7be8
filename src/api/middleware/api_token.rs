use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::config::state::AppState;
use crate::exceptions::exception::AppException;

const API_GUARD: &str = "api";

/// Rejects requests whose `Authorization: Bearer <token>` does not match `API_TOKEN`.
pub async fn require_api_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppException> {
    let presented: Option<&str> = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    match (presented, state.environment.api_token.as_deref()) {
        (Some(token), Some(expected)) if token == expected => Ok(next.run(request).await),
        _ => {
            tracing::debug!("Rejected API request without a valid bearer token");
            Err(AppException::Unauthenticated {
                guards: vec![API_GUARD.to_owned()],
            })
        }
    }
}
