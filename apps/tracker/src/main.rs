use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tracker::config::Config;
use tracker::routes::build_router;
use tracker::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = &config.rust_log;
            EnvFilter::new(format!(
                "{}={level},{}={level},tower_http={level}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_CRATE_NAME")
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting tracker relay v{}", env!("CARGO_PKG_VERSION"));

    let missing = config.missing_credentials();
    if !missing.is_empty() {
        warn!(
            "Nutritionix credentials not set ({}); lookups will fail upstream",
            missing.join(", ")
        );
    }
    info!("Forwarding lookups to {}", config.nutritionix_url);

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
