// src/services/history.rs

use chrono::Utc;

use crate::{error::QuizError, models::score::ScoreSnapshot, services::required};

/// Append-only ledger of score snapshots.
#[derive(Debug, Default)]
pub struct ScoreHistory {
    snapshots: Vec<ScoreSnapshot>,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_snapshot(&mut self, quiz_id: i64, user_id: i64, score: u32) {
        self.snapshots.push(ScoreSnapshot {
            quiz_id,
            user_id,
            score,
            timestamp: Utc::now(),
        });
    }

    /// Returns every snapshot recorded for the user, oldest first.
    pub fn get_scores_for_user(&self, user_id: Option<i64>) -> Result<Vec<ScoreSnapshot>, QuizError> {
        let user_id = required(user_id, "user_id")?;

        Ok(self
            .snapshots
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }
}
