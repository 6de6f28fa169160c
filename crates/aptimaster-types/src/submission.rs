//! Submission entity
//!
//! The state payload reports a submissions collection, but the backend has
//! no write path for it yet - it is always served empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student's recorded answer to a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub question_id: String,
    pub answer: i32,
    pub is_correct: bool,
    pub timestamp: DateTime<Utc>,
    pub note_id: String,
}
