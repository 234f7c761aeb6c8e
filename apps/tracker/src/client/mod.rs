//! Client side of the tracker: the relay HTTP client and the form state holder
//! that drives a lookup from user input to a displayable result.

pub mod form;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::models::nutrition::NutrientsResponse;

pub const DEFAULT_RELAY_URL: &str = "http://localhost:8002";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Relay error (status {status}): {message}")]
    Relay { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    error: String,
}

/// Source of nutrition results for the form. Implemented by `RelayClient`.
#[async_trait]
pub trait NutritionLookup: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<NutrientsResponse, ClientError>;
}

/// HTTP client for the relay's `POST /get-nutrition`.
#[derive(Clone)]
pub struct RelayClient {
    client: Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl NutritionLookup for RelayClient {
    async fn lookup(&self, query: &str) -> Result<NutrientsResponse, ClientError> {
        let url = format!("{}/get-nutrition", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "ingredient": query }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Prefer the relay's own message over the raw body
            let message = serde_json::from_str::<RelayErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(ClientError::Relay {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: NutrientsResponse = serde_json::from_str(&body)?;
        debug!("Relay returned {} food(s)", parsed.foods.len());
        Ok(parsed)
    }
}
