//! Nutritionix client: the only place that talks to the external nutrition API.
//!
//! The relay forwards queries through the `NutritionSource` trait so handlers
//! never see credentials or transport details.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::{de::IgnoredAny, Serialize};
use thiserror::Error;
use tracing::debug;

pub const NUTRITIONIX_API_URL: &str = "https://trackapi.nutritionix.com/v2/natural/nutrients";

#[derive(Debug, Error)]
pub enum NutritionixError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct NaturalNutrientsRequest<'a> {
    query: &'a str,
}

/// Anything that can answer a natural-language nutrition query with a raw
/// JSON body. Carried in `AppState` as `Arc<dyn NutritionSource>`.
#[async_trait]
pub trait NutritionSource: Send + Sync {
    async fn natural_nutrients(&self, query: &str) -> Result<Bytes, NutritionixError>;
}

/// Credentials sent as `x-app-id` / `x-app-key`. Missing values are not
/// rejected here; the API answers 401 and the relay reports a failure.
#[derive(Clone, Default)]
pub struct Credentials {
    pub app_id: Option<String>,
    pub app_key: Option<String>,
}

#[derive(Clone)]
pub struct NutritionixClient {
    client: Client,
    endpoint: String,
    credentials: Credentials,
}

impl NutritionixClient {
    pub fn new(endpoint: String, credentials: Credentials) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            credentials,
        }
    }
}

#[async_trait]
impl NutritionSource for NutritionixClient {
    /// Single POST, no retry. The body is returned exactly as received once it
    /// is known to be JSON.
    async fn natural_nutrients(&self, query: &str) -> Result<Bytes, NutritionixError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&NaturalNutrientsRequest { query });

        if let Some(app_id) = &self.credentials.app_id {
            request = request.header("x-app-id", app_id);
        }
        if let Some(app_key) = &self.credentials.app_key {
            request = request.header("x-app-key", app_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NutritionixError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<IgnoredAny>(&body)?;

        debug!("Nutritionix call succeeded: {} bytes", body.len());

        Ok(body)
    }
}
