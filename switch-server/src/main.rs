use switch_server::board::BoardConfig;
use switch_server::config::AppConfig;
use switch_server::ptv::PtvClient;
use switch_server::switch::SwitchConfig;
use switch_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Local overrides first; dotenvy never replaces a variable already set.
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;

    let ptv = match config.ptv_config() {
        Ok(ptv_config) => Ok(PtvClient::new(ptv_config)?),
        Err(e) => {
            error!(error = %e, "PTV API credentials not configured; API requests will fail");
            Err(e)
        }
    };

    let switch_config = SwitchConfig::default();
    switch_config.validate()?;

    let state = AppState::new(
        ptv,
        switch_config,
        BoardConfig::default(),
        config.static_dir.clone(),
    );
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, static_dir = %config.static_dir.display(), "Switch planner listening");
    info!("  GET /api/switch      - Best train-to-bus switch");
    info!("  GET /api/departures  - Departure boards");
    info!("  GET /health          - Health check");

    axum::serve(listener, app).await?;
    Ok(())
}
