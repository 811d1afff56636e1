//! Aggregator Handlers

use axum::{extract::State, response::Html};

use crate::startup::AppState;

/// Combine the auth and log replies into an HTML fragment.
///
/// Always 200; downstream failures show up as text inside the fragment.
pub async fn serve(State(state): State<AppState>) -> Html<String> {
    let aggregate = state.aggregator.aggregate().await;
    Html(aggregate.to_html())
}
