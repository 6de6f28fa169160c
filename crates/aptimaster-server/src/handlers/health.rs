//! Health check handler

use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
}

/// Overall status is always "healthy"; only the database flag tracks
/// store connectivity. The probe connection is scoped and returns to the
/// pool before the response is built.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = if state.db.ping().await {
        "connected"
    } else {
        "disconnected"
    };

    Json(HealthResponse {
        status: "healthy",
        database,
    })
}
