//! Application state handler

use crate::error::ApiError;
use crate::storage::{QuestionStore, StoreError};
use crate::AppState;
use aptimaster_types::{Question, Submission};
use axum::{extract::State, Json};
use serde::Serialize;

/// Mode flag reported when the state was served from the fallback store.
pub const SAFE_MODE: &str = "SAFE_MODE_NO_DB";

#[derive(Debug, Serialize)]
pub struct StateResponse {
    questions: Vec<Question>,
    /// Always empty for now - there is no submission write path.
    submissions: Vec<Submission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<&'static str>,
}

/// GET /api/state
///
/// Full read of the question set. Rows come back in natural storage
/// order; no ordering is guaranteed.
pub async fn state(State(state): State<AppState>) -> Result<Json<StateResponse>, ApiError> {
    match state.db.list_all().await {
        Ok(questions) => Ok(Json(StateResponse {
            questions,
            submissions: Vec::new(),
            mode: None,
        })),
        Err(StoreError::Unavailable(_)) => {
            let questions = state.fallback.list_all().await?;
            Ok(Json(StateResponse {
                questions,
                submissions: Vec::new(),
                mode: Some(SAFE_MODE),
            }))
        }
        Err(e) => Err(e.into()),
    }
}
