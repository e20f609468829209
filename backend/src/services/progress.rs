// src/services/progress.rs

use std::collections::HashMap;

use crate::{
    error::QuizError,
    models::progress::{ProgressAnswer, ProgressRecord},
    services::required,
};

/// Per-(quiz, user) journal of unscored answers.
///
/// Never consults the catalog: question ids are not checked against the quiz.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    records: HashMap<(i64, i64), ProgressRecord>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one answer, creating the journal on first use.
    pub fn save_answer(
        &mut self,
        quiz_id: Option<i64>,
        user_id: Option<i64>,
        question_id: Option<i64>,
        selected_option: Option<i64>,
    ) -> Result<&ProgressRecord, QuizError> {
        let quiz_id = required(quiz_id, "quiz_id")?;
        let user_id = required(user_id, "user_id")?;
        let question_id = required(question_id, "question_id")?;
        let selected_option = required(selected_option, "selected_option")?;

        let record = self
            .records
            .entry((quiz_id, user_id))
            .or_insert_with(|| ProgressRecord::new(quiz_id, user_id));

        if record.has_answered(question_id) {
            tracing::warn!(
                "Progress for question {} already saved (quiz {}, user {})",
                question_id,
                quiz_id,
                user_id
            );
            return Err(QuizError::DuplicateAnswer { question_id });
        }

        record.answers.push(ProgressAnswer {
            question_id,
            selected_option,
        });

        Ok(&*record)
    }

    pub fn get_progress(
        &self,
        quiz_id: Option<i64>,
        user_id: Option<i64>,
    ) -> Result<Option<&ProgressRecord>, QuizError> {
        let quiz_id = required(quiz_id, "quiz_id")?;
        let user_id = required(user_id, "user_id")?;

        Ok(self.records.get(&(quiz_id, user_id)))
    }
}
