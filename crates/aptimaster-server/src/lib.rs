//! AptiMaster Server
//!
//! HTTP backend for the AptiMaster quiz platform: CRUD over a single
//! `questions` table in MySQL, with an in-memory fallback ("safe mode")
//! serving a fixed question set while the database is unreachable.

pub mod config;
pub mod error;
pub mod handlers;
pub mod storage;

use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use storage::{Database, MemoryStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub fallback: Arc<MemoryStore>,
}

/// Build the application router: the four API routes, CORS open to the
/// frontend, request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/state", get(handlers::state))
        .route("/api/questions", post(handlers::questions::create))
        .route("/api/questions/:id", delete(handlers::questions::remove))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::storage::seed_questions;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    /// State whose database points at a closed port, forcing every request
    /// down the safe-mode path.
    fn safe_mode_state() -> AppState {
        let store = StoreConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            user: "root".to_string(),
            password: String::new(),
            database: "aptimaster".to_string(),
        };

        AppState {
            db: Arc::new(Database::connect_lazy(&store)),
            fallback: Arc::new(MemoryStore::new(seed_questions())),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete_req(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn health_stays_healthy_with_database_down() {
        let app = router(safe_mode_state());

        let response = app.oneshot(get("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "disconnected");
    }

    #[tokio::test]
    async fn state_serves_fallback_set_in_safe_mode() {
        let app = router(safe_mode_state());

        let response = app.oneshot(get("/api/state")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["mode"], "SAFE_MODE_NO_DB");
        assert_eq!(body["submissions"], json!([]));

        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0]["id"], 1);
        assert_eq!(questions[0]["category"], "Quantitative");
    }

    #[tokio::test]
    async fn created_question_shows_up_in_state() {
        let app = router(safe_mode_state());

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/questions",
                r#"{"text":"Q?","category":"C","options":["a","b"],"correctAnswer":0,"difficulty":"easy","timeLimitMinutes":5,"explanation":"e"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["mode"], "memory_storage");

        let response = app.oneshot(get("/api/state")).await.unwrap();
        let body = body_json(response).await;
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 2);

        // Appended after the seed set, as-is, with no id assigned.
        let added = &questions[1];
        assert_eq!(added["text"], "Q?");
        assert_eq!(added["options"], json!(["a", "b"]));
        assert_eq!(added["correctAnswer"], 0);
        assert!(added.get("id").is_none());
    }

    #[tokio::test]
    async fn missing_required_field_is_a_bad_request() {
        let app = router(safe_mode_state());

        // "text" omitted
        let response = app
            .oneshot(post_json(
                "/api/questions",
                r#"{"category":"C","options":["a"],"correctAnswer":0,"explanation":"e"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body.get("error").is_some());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let app = router(safe_mode_state());

        for _ in 0..2 {
            let response = app.clone().oneshot(delete_req("/api/questions/1")).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body = body_json(response).await;
            assert_eq!(body["status"], "ok");
        }

        let response = app.oneshot(get("/api/state")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["questions"], json!([]));
    }

    #[tokio::test]
    async fn non_numeric_id_is_a_bad_request() {
        let app = router(safe_mode_state());

        let response = app.oneshot(delete_req("/api/questions/abc")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body.get("error").is_some());
    }
}
