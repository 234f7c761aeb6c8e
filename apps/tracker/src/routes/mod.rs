pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::relay::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::liveness_handler))
        .route("/health", get(health::health_handler))
        .route("/get-nutrition", post(handlers::handle_get_nutrition))
        .with_state(state)
}
