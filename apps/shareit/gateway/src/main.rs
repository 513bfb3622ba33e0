use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use mockable::DefaultClock;
use shareit_gateway::{AppState, Config, ShareItClient, api, openapi};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let client = ShareItClient::new(&config.upstream)
        .map_err(|e| eyre::eyre!("Failed to build ShareIt client: {}", e))?;
    info!(upstream = %client.base_url(), "Forwarding to ShareIt server");

    let state = AppState {
        config,
        client,
        clock: Arc::new(DefaultClock),
    };

    let router = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(&state)).await?;
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::ready_router(state.clone()));

    info!("Starting ShareIt gateway (10s shutdown timeout)");

    // Nothing to release on shutdown; in-flight requests drain in the server loop
    create_production_app(app, &state.config.server, Duration::from_secs(10), async {})
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("ShareIt gateway shutdown complete");
    Ok(())
}
