use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether the one-time profile load has completed
    pub profiles_loaded: bool,
}

/// Health check endpoint. Never triggers the profile load itself.
pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let profiles_loaded = state.profiles.is_open();

    let status = if profiles_loaded { "healthy" } else { "starting" };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            profiles_loaded,
        }),
    )
}
