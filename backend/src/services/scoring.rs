// src/services/scoring.rs

use std::collections::HashMap;

use crate::{
    error::{Entity, QuizError},
    models::result::{ResultRecord, ScoredAnswer, SubmissionFeedback},
    services::{catalog::QuizCatalog, history::ScoreHistory},
};

/// Owns scored result records and applies the scoring rules.
#[derive(Debug, Default)]
pub struct ScoringEngine {
    results: HashMap<(i64, i64), ResultRecord>,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores one answer against the catalog's answer key.
    ///
    /// * Fails if the quiz or the question does not exist.
    /// * Each question counts once per (quiz, user); a repeat is rejected.
    /// * A correct answer adds exactly 1 to the score.
    /// * Every accepted submission appends the cumulative score to history.
    pub fn submit_answer(
        &mut self,
        catalog: &QuizCatalog,
        history: &mut ScoreHistory,
        quiz_id: i64,
        question_id: i64,
        selected_option: i64,
        user_id: i64,
    ) -> Result<SubmissionFeedback, QuizError> {
        let quiz = catalog
            .get_quiz_by_id(quiz_id)
            .ok_or(QuizError::NotFound(Entity::Quiz))?;
        let question = quiz
            .question(question_id)
            .ok_or(QuizError::NotFound(Entity::Question))?;

        let is_correct = selected_option == question.correct_option;

        let result = self
            .results
            .entry((quiz_id, user_id))
            .or_insert_with(|| ResultRecord::new(quiz_id, user_id));

        if result.has_answered(question_id) {
            tracing::warn!(
                "Duplicate submission for question {} (quiz {}, user {})",
                question_id,
                quiz_id,
                user_id
            );
            return Err(QuizError::DuplicateAnswer { question_id });
        }

        result.answers.push(ScoredAnswer {
            question_id,
            selected_option,
            is_correct,
        });
        if is_correct {
            result.score += 1;
        }

        history.append_snapshot(quiz_id, user_id, result.score);

        tracing::info!(
            "User {} answered question {} of quiz {} ({}), score {}",
            user_id,
            question_id,
            quiz_id,
            if is_correct { "correct" } else { "incorrect" },
            result.score
        );

        Ok(SubmissionFeedback::new(is_correct, question.correct_option))
    }

    pub fn get_user_results(&self, quiz_id: i64, user_id: i64) -> Option<&ResultRecord> {
        self.results.get(&(quiz_id, user_id))
    }
}
