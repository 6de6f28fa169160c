//! Storage layer
//!
//! One `QuestionStore` interface with two implementations: the MySQL-backed
//! `Database` and the in-memory `MemoryStore` that requests fall back to
//! while the database is unreachable ("safe mode").

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::{seed_questions, MemoryStore};

use aptimaster_types::{NewQuestion, Question};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not hand out a connection. Triggers the
    /// safe-mode fallback and is never surfaced to the client.
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("invalid options payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Question store interface. Handlers depend on these three operations
/// and nothing else.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError>;
    async fn insert(&self, question: NewQuestion) -> Result<(), StoreError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}
