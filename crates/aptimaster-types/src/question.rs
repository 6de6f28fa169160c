//! Question entity and its creation payload

use serde::{Deserialize, Serialize};

/// A quiz question as stored and served by the backend.
///
/// `id` is assigned by the relational store. Records appended to the
/// in-memory fallback in safe mode carry no id, and the field is omitted
/// from JSON in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
    pub category: String,
    pub options: Vec<String>,
    /// Index into `options`. Validity is left to the caller.
    pub correct_answer: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_minutes: Option<i32>,
    pub explanation: String,
}

/// Payload for creating a question - the seven writable fields, no id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    pub text: String,
    pub category: String,
    pub options: Vec<String>,
    pub correct_answer: i32,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub time_limit_minutes: Option<i32>,
    pub explanation: String,
}

impl From<NewQuestion> for Question {
    fn from(new: NewQuestion) -> Self {
        Question {
            id: None,
            text: new.text,
            category: new.category,
            options: new.options,
            correct_answer: new.correct_answer,
            difficulty: new.difficulty,
            time_limit_minutes: new.time_limit_minutes,
            explanation: new.explanation,
        }
    }
}
