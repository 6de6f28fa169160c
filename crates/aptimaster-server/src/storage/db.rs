//! MySQL database layer

use super::{QuestionStore, StoreError};
use crate::config::StoreConfig;
use aptimaster_types::{NewQuestion, Question};
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::{MySql, MySqlPool};
use std::time::Duration;

/// MySQL-backed question store.
///
/// The `questions` table itself belongs to the deployment (no migrations
/// are run here): columns `id`, `text`, `category`, `options` (TEXT,
/// JSON-encoded array), `correctAnswer`, `difficulty` (nullable),
/// `timeLimitMinutes` (nullable), `explanation`.
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// Build the pool without touching the network. The first acquire on a
    /// request path establishes the actual connection, so the server can
    /// start in safe mode while MySQL is down.
    pub fn connect_lazy(config: &StoreConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_lazy_with(options);

        Self { pool }
    }

    /// Scoped acquisition: the connection returns to the pool on drop, on
    /// every exit path. An acquire failure is the "store unavailable"
    /// signal that sends the request down the fallback path; the next
    /// request attempts a fresh connection.
    async fn conn(&self) -> Result<PoolConnection<MySql>, StoreError> {
        self.pool.acquire().await.map_err(|e| {
            tracing::warn!("database connection failed: {e}");
            StoreError::Unavailable(e)
        })
    }

    /// Connectivity probe for the health endpoint.
    pub async fn ping(&self) -> bool {
        self.conn().await.is_ok()
    }
}

#[async_trait]
impl QuestionStore for Database {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        let mut conn = self.conn().await?;

        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, text, category, options, correctAnswer,
                   difficulty, timeLimitMinutes, explanation
            FROM questions
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        rows.into_iter().map(QuestionRow::decode).collect()
    }

    async fn insert(&self, question: NewQuestion) -> Result<(), StoreError> {
        let mut conn = self.conn().await?;

        sqlx::query(
            r#"
            INSERT INTO questions
                (text, category, options, correctAnswer, difficulty, timeLimitMinutes, explanation)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&question.text)
        .bind(&question.category)
        .bind(serde_json::to_string(&question.options)?)
        .bind(question.correct_answer)
        .bind(&question.difficulty)
        .bind(question.time_limit_minutes)
        .bind(&question.explanation)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let mut conn = self.conn().await?;

        // Succeeds whether or not a row matched.
        sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    text: String,
    category: String,
    /// JSON-encoded array of option strings.
    options: String,
    #[sqlx(rename = "correctAnswer")]
    correct_answer: i32,
    difficulty: Option<String>,
    #[sqlx(rename = "timeLimitMinutes")]
    time_limit_minutes: Option<i32>,
    explanation: String,
}

impl QuestionRow {
    fn decode(self) -> Result<Question, StoreError> {
        let options: Vec<String> = serde_json::from_str(&self.options)?;
        Ok(Question {
            id: Some(self.id),
            text: self.text,
            category: self.category,
            options,
            correct_answer: self.correct_answer,
            difficulty: self.difficulty,
            time_limit_minutes: self.time_limit_minutes,
            explanation: self.explanation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(options: &str) -> QuestionRow {
        QuestionRow {
            id: 1,
            text: "Q?".to_string(),
            category: "C".to_string(),
            options: options.to_string(),
            correct_answer: 0,
            difficulty: None,
            time_limit_minutes: None,
            explanation: "e".to_string(),
        }
    }

    #[test]
    fn options_round_trip_through_text_encoding() {
        let original = vec![
            "10".to_string(),
            "15".to_string(),
            "20".to_string(),
            "25".to_string(),
        ];
        let encoded = serde_json::to_string(&original).unwrap();

        let question = row(&encoded).decode().unwrap();
        assert_eq!(question.options, original);
        assert_eq!(question.id, Some(1));
    }

    #[test]
    fn malformed_options_column_is_an_operation_failure() {
        let err = row("not json").decode().unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }
}
