// src/handlers/progress.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::progress::{SaveProgressRequest, SaveProgressResponse, UserQuery},
    state::SharedEngine,
};

/// Saves one raw answer to the user's progress journal.
/// Nothing is scored and the quiz itself is not consulted.
pub async fn save_progress(
    State(engine): State<SharedEngine>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<SaveProgressRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(quiz_id) = path?;
    let Json(payload) = payload?;

    let progress = engine
        .write()
        .await
        .save_answer(
            Some(quiz_id),
            payload.user_id,
            payload.question_id,
            payload.selected_option,
        )?
        .clone();

    Ok(Json(SaveProgressResponse {
        message: "User Progress saved successfully",
        progress,
    }))
}

/// Retrieves the progress journal of a user for a quiz.
pub async fn get_progress(
    State(engine): State<SharedEngine>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(quiz_id) = path?;
    let Query(params) = query?;

    let progress = engine
        .read()
        .await
        .get_progress(Some(quiz_id), params.user_id)?
        .cloned()
        .ok_or(AppError::NotFound(
            "No progress found for this user".to_string(),
        ))?;

    Ok(Json(progress))
}
