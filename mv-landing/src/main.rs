//! Service binary: loads configuration, wires backends and serves the
//! landing-page contact endpoints.

use mv_landing::{config::LandingConfig, handlers, observability, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize observability (logging, tracing)
    observability::init()?;

    let config = LandingConfig::load()?;
    let bind = config.service.bind.clone();

    tracing::info!(
        service = %config.service.name,
        bind = %bind,
        base_url = %config.service.base_url,
        database = config.database.url.is_some(),
        smtp = config.smtp.host.is_some(),
        "Configuration loaded"
    );

    let state = AppState::from_config(config).await?;
    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!("Listening on http://{bind}");

    axum::serve(listener, app).await?;

    Ok(())
}
