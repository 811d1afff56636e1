//! Log Handlers

use axum::extract::State;

use crate::startup::AppState;

/// Report when the request was logged
pub async fn log_request(State(state): State<AppState>) -> String {
    state.log.record()
}
