//! Route Configuration
//!
//! Each role serves a single route at `/`.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::config::ServiceRole;
use crate::presentation::middleware::create_security_headers_layer;
use crate::startup::AppState;

/// Create the router for the role configured in `state`
pub fn create_router(state: AppState) -> Router {
    let security = create_security_headers_layer(&state.settings.security);

    let router = match state.settings.service.role {
        ServiceRole::Auth => auth_routes(),
        ServiceRole::Log => log_routes(),
        ServiceRole::Api => api_routes(),
    };

    router
        // Outermost so headers are added to every response
        .layer(security)
        .with_state(state)
}

/// Auth service routes
fn auth_routes() -> Router<AppState> {
    Router::new().route("/", post(handlers::auth::authenticate))
}

/// Log service routes
fn log_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::log::log_request))
}

/// Aggregator routes
fn api_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::aggregate::serve))
}
