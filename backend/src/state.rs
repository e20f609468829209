use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::RwLock;

use crate::{config::Config, services::QuizEngine};

/// The quiz core behind a single lock; every request holds it for one
/// whole core operation.
pub type SharedEngine = Arc<RwLock<QuizEngine>>;

#[derive(Clone)]
pub struct AppState {
    pub engine: SharedEngine,
    pub config: Config,
}

impl AppState {
    /// Fresh, empty quiz state.
    pub fn new(config: Config) -> Self {
        Self {
            engine: Arc::new(RwLock::new(QuizEngine::new())),
            config,
        }
    }
}

impl FromRef<AppState> for SharedEngine {
    fn from_ref(state: &AppState) -> Self {
        state.engine.clone()
    }
}

