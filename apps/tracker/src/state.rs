use std::sync::Arc;

use crate::config::Config;
use crate::nutritionix::{NutritionSource, NutritionixClient};

/// Shared relay state injected into all route handlers via Axum extractors.
/// Immutable after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Upstream lookup. Default: `NutritionixClient`.
    pub nutrition: Arc<dyn NutritionSource>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = NutritionixClient::new(config.nutritionix_url.clone(), config.credentials());
        Self {
            config,
            nutrition: Arc::new(client),
        }
    }
}
