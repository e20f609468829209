// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{progress, quiz, score},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the quiz and user routes under `/api/v1`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (quiz engine, config).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Skipping invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let quiz_routes = Router::new()
        .route("/", post(quiz::create_quiz))
        .route("/{id}", get(quiz::get_quiz))
        .route("/{id}/add", post(progress::save_progress))
        .route("/{id}/get", get(progress::get_progress))
        .route("/{id}/answers", post(quiz::submit_answer))
        .route("/{id}/results", get(quiz::get_results));

    let user_routes = Router::new().route("/{id}/scores", get(score::get_user_scores));

    Router::new()
        .nest("/api/v1/quiz", quiz_routes)
        .nest("/api/v1/users", user_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
