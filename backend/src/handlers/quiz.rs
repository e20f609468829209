// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        progress::UserQuery,
        quiz::{CreateQuizRequest, Question},
        result::SubmitAnswerRequest,
    },
    state::SharedEngine,
};

/// Creates a new quiz.
///
/// * Requires a non-empty title and a list of questions.
/// * Returns the stored quiz, answer key included.
pub async fn create_quiz(
    State(engine): State<SharedEngine>,
    payload: Result<Json<CreateQuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(format!("Invalid input: {}", e)))?;

    let questions = payload.questions.into_iter().map(Question::from).collect();
    let quiz = engine
        .write()
        .await
        .create_quiz(payload.id, payload.title, questions);

    Ok((StatusCode::CREATED, Json(quiz)))
}

/// Retrieves a quiz without its correct answers.
pub async fn get_quiz(
    State(engine): State<SharedEngine>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let quiz = engine
        .read()
        .await
        .get_public_quiz(id)
        .ok_or(AppError::NotFound("Quiz Data not found".to_string()))?;

    Ok(Json(quiz))
}

/// Scores one answer and returns feedback, revealing the correct option.
pub async fn submit_answer(
    State(engine): State<SharedEngine>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<SubmitAnswerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(quiz_id) = path?;
    let Json(payload) = payload?;

    // Absence checks only: 0 is a legitimate id and option index.
    let (Some(user_id), Some(question_id), Some(selected_option)) =
        (payload.user_id, payload.question_id, payload.selected_option)
    else {
        return Err(AppError::BadRequest("Invalid input".to_string()));
    };

    let feedback = engine
        .write()
        .await
        .submit_answer(quiz_id, question_id, selected_option, user_id)?;

    Ok(Json(feedback))
}

/// Retrieves the scored results of a user for a quiz.
pub async fn get_results(
    State(engine): State<SharedEngine>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(quiz_id) = path?;
    let Query(params) = query?;

    let user_id = params
        .user_id
        .ok_or(AppError::BadRequest("Please provide user_id".to_string()))?;

    let results = engine
        .read()
        .await
        .get_user_results(quiz_id, user_id)
        .cloned()
        .ok_or(AppError::NotFound(
            "Results not found for this user".to_string(),
        ))?;

    Ok(Json(results))
}
