use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::nutritionix::NutritionixError;

pub const INGREDIENT_REQUIRED: &str = "Ingredient is required";
pub const UPSTREAM_FAILED: &str = "Failed to fetch nutrition data";

/// Relay error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Nutritionix error: {0}")]
    Upstream(#[from] NutritionixError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream(e) => {
                tracing::error!("Error fetching nutrition data: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILED.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
