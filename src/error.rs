use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::RecommendationError;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error(transparent)]
    Recommendation(#[from] RecommendationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Short hint the client can act on, when there is one
    fn hint(&self) -> Option<&'static str> {
        match self {
            AppError::Recommendation(RecommendationError::NoCandidate { .. }) => {
                Some("Add an item in this category to your wardrobe")
            }
            AppError::Recommendation(RecommendationError::InsufficientWardrobe { .. }) => {
                Some("Add more items to your wardrobe")
            }
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let hint = self.hint();
        let (status, message) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Recommendation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            AppError::Cache(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = match hint {
            Some(hint) => Json(json!({ "error": message, "hint": hint })),
            None => Json(json!({ "error": message })),
        };

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
