//! In-memory fallback store ("safe mode")
//!
//! Lets the service run before MySQL is configured. The fallback sequence
//! sits behind a lock; the legacy implementation left it unsynchronized.

use super::{QuestionStore, StoreError};
use aptimaster_types::{NewQuestion, Question};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-wide fallback sequence of questions, in insertion order.
pub struct MemoryStore {
    questions: RwLock<Vec<Question>>,
}

impl MemoryStore {
    pub fn new(seed: Vec<Question>) -> Self {
        Self {
            questions: RwLock::new(seed),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(seed_questions())
    }
}

/// The fixed question set served before the database comes up.
pub fn seed_questions() -> Vec<Question> {
    vec![Question {
        id: Some(1),
        text: "If 5 workers can build a wall in 12 days, how many workers are needed to build it in 4 days?".to_string(),
        category: "Quantitative".to_string(),
        options: vec![
            "10".to_string(),
            "15".to_string(),
            "20".to_string(),
            "25".to_string(),
        ],
        correct_answer: 1,
        difficulty: None,
        time_limit_minutes: None,
        explanation: "Inverse proportion: 5 * 12 = X * 4. X = 60 / 4 = 15.".to_string(),
    }]
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.questions.read().await.clone())
    }

    /// Appends as-is with no id: identifiers belong to the relational
    /// store.
    async fn insert(&self, question: NewQuestion) -> Result<(), StoreError> {
        self.questions.write().await.push(question.into());
        Ok(())
    }

    /// Removes every entry with a matching id. Entries appended in safe
    /// mode have no id and never match.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        self.questions.write().await.retain(|q| q.id != Some(id));
        Ok(())
    }
}
