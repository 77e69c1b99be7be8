use axum::{middleware::from_fn_with_state, routing::get, Router};

use super::handler;
use crate::api::middleware::api_token::require_api_token;
use crate::config::state::AppState;

pub fn asset_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/assets", get(handler::index).post(handler::store))
        .route("/api/assets/{id}", get(handler::show))
        .route_layer(from_fn_with_state(state, require_api_token))
}
