use anyhow::{Context, Result};

use crate::nutritionix::{Credentials, NUTRITIONIX_API_URL};

pub const DEFAULT_PORT: u16 = 8002;

/// Relay configuration loaded from environment variables.
/// Nutritionix credentials are optional; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub nutritionix_app_id: Option<String>,
    pub nutritionix_app_key: Option<String>,
    pub nutritionix_url: String,
    pub host: String,
    /// `0` asks the OS for a free port.
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Ok(Config {
            nutritionix_app_id: var("NUTRITIONIX_API_ID"),
            nutritionix_app_key: var("NUTRITIONIX_API_KEY"),
            nutritionix_url: var("NUTRITIONIX_API_URL")
                .unwrap_or_else(|| NUTRITIONIX_API_URL.to_string()),
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: match var("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a valid port number, got '{port}'"))?,
                None => DEFAULT_PORT,
            },
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            app_id: self.nutritionix_app_id.clone(),
            app_key: self.nutritionix_app_key.clone(),
        }
    }

    /// Names of credential variables that are not set.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.nutritionix_app_id.is_none() {
            missing.push("NUTRITIONIX_API_ID");
        }
        if self.nutritionix_app_key.is_none() {
            missing.push("NUTRITIONIX_API_KEY");
        }
        missing
    }
}
