// src/models/progress.rs

use serde::{Deserialize, Serialize};

/// Raw, unscored answer journal of one user for one quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub quiz_id: i64,
    pub user_id: i64,
    pub answers: Vec<ProgressAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressAnswer {
    pub question_id: i64,
    pub selected_option: i64,
}

impl ProgressRecord {
    pub fn new(quiz_id: i64, user_id: i64) -> Self {
        Self {
            quiz_id,
            user_id,
            answers: Vec::new(),
        }
    }

    pub fn has_answered(&self, question_id: i64) -> bool {
        self.answers.iter().any(|a| a.question_id == question_id)
    }
}

/// DTO for saving progress.
/// Every field is optional so a missing value can be told apart from `0`.
#[derive(Debug, Default, Deserialize)]
pub struct SaveProgressRequest {
    #[serde(default, deserialize_with = "super::lenient_id")]
    pub user_id: Option<i64>,
    pub question_id: Option<i64>,
    pub selected_option: Option<i64>,
}

/// Response body for a successful progress save.
#[derive(Debug, Serialize)]
pub struct SaveProgressResponse {
    pub message: &'static str,
    pub progress: ProgressRecord,
}

/// Query parameters carrying the acting user.
#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub user_id: Option<i64>,
}
