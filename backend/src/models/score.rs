// src/models/score.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of a user's cumulative score on a quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub quiz_id: i64,
    pub user_id: i64,
    pub score: u32,
    pub timestamp: DateTime<Utc>,
}
