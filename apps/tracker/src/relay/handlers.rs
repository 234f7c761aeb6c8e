use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::{AppError, INGREDIENT_REQUIRED};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NutritionRequest {
    /// Natural-language query, e.g. "150 grams of rice brown rice".
    pub ingredient: Option<String>,
}

/// POST /get-nutrition
///
/// Forwards the query to the nutrition API and returns its body unchanged.
/// A body that is not a JSON object with a string `ingredient` is treated the
/// same as a missing ingredient.
pub async fn handle_get_nutrition(
    State(state): State<AppState>,
    payload: Result<Json<NutritionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let ingredient = match payload {
        Ok(Json(NutritionRequest {
            ingredient: Some(ingredient),
        })) if !ingredient.is_empty() => ingredient,
        Ok(_) => return Err(AppError::Validation(INGREDIENT_REQUIRED.to_string())),
        Err(rejection) => {
            debug!("Rejected nutrition request body: {rejection}");
            return Err(AppError::Validation(INGREDIENT_REQUIRED.to_string()));
        }
    };

    info!("Nutrition lookup: {ingredient}");
    let body = state.nutrition.natural_nutrients(&ingredient).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
