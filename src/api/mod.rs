use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::clients::store::{ProgramStore, StoreError};
use crate::models::form::FormError;
use crate::services::program_generator::ProgramGenerator;
use crate::services::workout_log::WorkoutLogService;

pub mod programs;
pub mod workout_logs;

#[derive(Clone)]
pub struct AppState {
    pub generator: ProgramGenerator,
    pub programs: Arc<dyn ProgramStore>,
    pub workout_logs: WorkoutLogService,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// The generator answered with its error program.
    #[error("{0}")]
    Unprocessable(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Form(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(_) => StatusCode::BAD_GATEWAY,
        };

        if let ApiError::Store(e) = &self {
            tracing::error!(error = %e, "api.store_error");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/programs",
            get(programs::list_programs).post(programs::create_program),
        )
        .route("/programs/preview", post(programs::preview_program))
        .route("/programs/{id}", get(programs::get_program))
        .route("/programs/{id}/logs", get(workout_logs::get_logs))
        .route(
            "/programs/{id}/logs/{week}/{day}",
            put(workout_logs::save_day),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
