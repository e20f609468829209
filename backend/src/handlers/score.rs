// src/handlers/score.rs

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};

use crate::{error::AppError, state::SharedEngine};

/// Lists every score snapshot recorded for a user, oldest first.
pub async fn get_user_scores(
    State(engine): State<SharedEngine>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = path?;

    let scores = engine.read().await.get_scores_for_user(Some(user_id))?;

    if scores.is_empty() {
        return Err(AppError::NotFound(
            "No historical scores found for this user".to_string(),
        ));
    }

    Ok(Json(scores))
}
