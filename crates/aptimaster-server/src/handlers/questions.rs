//! Question creation and deletion handlers

use crate::error::ApiError;
use crate::storage::{QuestionStore, StoreError};
use crate::AppState;
use aptimaster_types::NewQuestion;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

/// Mode flag reported when a question was written to the fallback store.
pub const MEMORY_MODE: &str = "memory_storage";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<&'static str>,
}

impl StatusResponse {
    fn ok() -> Self {
        Self {
            status: "ok",
            mode: None,
        }
    }

    fn ok_with_mode(mode: &'static str) -> Self {
        Self {
            status: "ok",
            mode: Some(mode),
        }
    }
}

/// POST /api/questions
///
/// A malformed or incomplete body is the client's fault: the extractor
/// rejection maps to a 400 rather than bubbling up as a 500.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Json(question) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    match state.db.insert(question.clone()).await {
        Ok(()) => Ok(Json(StatusResponse::ok())),
        Err(StoreError::Unavailable(_)) => {
            state.fallback.insert(question).await?;
            Ok(Json(StatusResponse::ok_with_mode(MEMORY_MODE)))
        }
        Err(e) => Err(e.into()),
    }
}

/// DELETE /api/questions/:id
///
/// Succeeds whether or not a matching row existed; "deleted" and "not
/// found" are deliberately indistinguishable.
pub async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    match state.db.delete_by_id(id).await {
        Ok(()) => Ok(Json(StatusResponse::ok())),
        Err(StoreError::Unavailable(_)) => {
            state.fallback.delete_by_id(id).await?;
            Ok(Json(StatusResponse::ok()))
        }
        Err(e) => Err(e.into()),
    }
}
