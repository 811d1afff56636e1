//! Authentication Handlers

use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;

use crate::application::services::auth_service;
use crate::shared::error::AppError;

/// Acknowledge any JSON payload
pub async fn authenticate(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<String, AppError> {
    let Json(payload) = payload?;
    Ok(auth_service::acknowledge(&payload))
}
