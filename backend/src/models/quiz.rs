// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A quiz as held by the catalog, including the answer key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub questions: Vec<Question>,
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text shown to the user.
    pub text: String,

    /// Answer options in display order.
    pub options: Vec<String>,

    /// Index into `options` of the correct answer.
    /// Stored exactly as given at creation; its range is never checked.
    pub correct_option: i64,
}

impl Quiz {
    /// Finds a question of this quiz by its id.
    pub fn question(&self, question_id: i64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

/// DTO for sending a quiz to end users (answer key stripped).
#[derive(Debug, Clone, Serialize)]
pub struct PublicQuiz {
    pub id: i64,
    pub title: String,
    pub questions: Vec<PublicQuestion>,
}

/// DTO for sending a question to end users (excludes `correct_option`).
#[derive(Debug, Clone, Serialize)]
pub struct PublicQuestion {
    pub id: i64,
    pub text: String,
    pub options: Vec<String>,
}

impl From<&Question> for PublicQuestion {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            text: q.text.clone(),
            options: q.options.clone(),
        }
    }
}

impl From<&Quiz> for PublicQuiz {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id,
            title: quiz.title.clone(),
            questions: quiz.questions.iter().map(PublicQuestion::from).collect(),
        }
    }
}

/// DTO for creating a new quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuizRequest {
    pub id: i64,
    #[validate(length(min = 1, message = "Quiz title must not be empty."))]
    pub title: String,
    pub questions: Vec<CreateQuestionRequest>,
}

/// DTO for one question inside `CreateQuizRequest`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    pub id: i64,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i64,
}

impl From<CreateQuestionRequest> for Question {
    fn from(req: CreateQuestionRequest) -> Self {
        Self {
            id: req.id,
            text: req.text,
            options: req.options,
            correct_option: req.correct_option,
        }
    }
}
