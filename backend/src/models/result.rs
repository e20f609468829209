// src/models/result.rs

use serde::{Deserialize, Serialize};

/// Scored answers of one user for one quiz.
///
/// `score` always equals the number of answers with `is_correct == true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub quiz_id: i64,
    pub user_id: i64,
    pub score: u32,
    pub answers: Vec<ScoredAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAnswer {
    pub question_id: i64,
    pub selected_option: i64,
    pub is_correct: bool,
}

impl ResultRecord {
    pub fn new(quiz_id: i64, user_id: i64) -> Self {
        Self {
            quiz_id,
            user_id,
            score: 0,
            answers: Vec::new(),
        }
    }

    pub fn has_answered(&self, question_id: i64) -> bool {
        self.answers.iter().any(|a| a.question_id == question_id)
    }
}

/// DTO for submitting an answer to be scored.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitAnswerRequest {
    #[serde(default, deserialize_with = "super::lenient_id")]
    pub user_id: Option<i64>,
    pub question_id: Option<i64>,
    pub selected_option: Option<i64>,
}

/// Feedback returned for a scored submission.
/// The correct option is revealed whether or not the answer was right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionFeedback {
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
    pub correct_option: i64,
    pub message: String,
}

impl SubmissionFeedback {
    pub fn new(is_correct: bool, correct_option: i64) -> Self {
        let message = if is_correct { "Correct!" } else { "Incorrect" };
        Self {
            is_correct,
            correct_option,
            message: message.to_string(),
        }
    }
}
