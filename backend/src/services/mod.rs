// src/services/mod.rs

//! The quiz core: catalog, progress journal, scoring and score history.
//!
//! Components are plain single-threaded structs. `QuizEngine` bundles them so
//! the HTTP layer can serialize every operation behind one lock.

pub mod catalog;
pub mod history;
pub mod progress;
pub mod scoring;

use crate::{
    error::QuizError,
    models::{
        progress::ProgressRecord,
        quiz::{PublicQuiz, Question, Quiz},
        result::{ResultRecord, SubmissionFeedback},
        score::ScoreSnapshot,
    },
};

pub use catalog::QuizCatalog;
pub use history::ScoreHistory;
pub use progress::ProgressTracker;
pub use scoring::ScoringEngine;

/// Presence check for optional inputs. `Some(0)` counts as present.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, QuizError> {
    value.ok_or_else(|| QuizError::InvalidInput(format!("Please provide {}", field)))
}

/// All quiz state of the process.
#[derive(Debug, Default)]
pub struct QuizEngine {
    catalog: QuizCatalog,
    progress: ProgressTracker,
    scoring: ScoringEngine,
    history: ScoreHistory,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_quiz(&mut self, id: i64, title: String, questions: Vec<Question>) -> Quiz {
        self.catalog.create_quiz(id, title, questions)
    }

    pub fn get_quiz_by_id(&self, id: i64) -> Option<&Quiz> {
        self.catalog.get_quiz_by_id(id)
    }

    /// Looks up a quiz and returns the client-safe projection.
    pub fn get_public_quiz(&self, id: i64) -> Option<PublicQuiz> {
        self.catalog
            .get_quiz_by_id(id)
            .map(QuizCatalog::sanitize_for_client)
    }

    pub fn save_answer(
        &mut self,
        quiz_id: Option<i64>,
        user_id: Option<i64>,
        question_id: Option<i64>,
        selected_option: Option<i64>,
    ) -> Result<&ProgressRecord, QuizError> {
        self.progress
            .save_answer(quiz_id, user_id, question_id, selected_option)
    }

    pub fn get_progress(
        &self,
        quiz_id: Option<i64>,
        user_id: Option<i64>,
    ) -> Result<Option<&ProgressRecord>, QuizError> {
        self.progress.get_progress(quiz_id, user_id)
    }

    pub fn submit_answer(
        &mut self,
        quiz_id: i64,
        question_id: i64,
        selected_option: i64,
        user_id: i64,
    ) -> Result<SubmissionFeedback, QuizError> {
        self.scoring.submit_answer(
            &self.catalog,
            &mut self.history,
            quiz_id,
            question_id,
            selected_option,
            user_id,
        )
    }

    pub fn get_user_results(&self, quiz_id: i64, user_id: i64) -> Option<&ResultRecord> {
        self.scoring.get_user_results(quiz_id, user_id)
    }

    pub fn get_scores_for_user(&self, user_id: Option<i64>) -> Result<Vec<ScoreSnapshot>, QuizError> {
        self.history.get_scores_for_user(user_id)
    }
}
