use std::sync::Arc;

use anyhow::Context as _;
use rustls::crypto::ring::default_provider;
use tracing::info;

use hangar_bot::{
    logging::init_logging,
    server::{AppState, build_router},
};
use hangar_core::{Context, Settings};
use hangar_utils::{pagination::SessionStore, signature::RequestVerifier};
use hangar_vehicles::VehicleClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load the .env file
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    init_logging(&settings)?;

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    let verifier =
        RequestVerifier::from_hex(&settings.public_key).context("PUBLIC_KEY is not usable")?;

    // One pooled client for every vehicle lookup
    let vehicles = VehicleClient::new(&settings.vehicle_api_url, settings.vehicle_api_timeout)?;
    let sessions = SessionStore::new(settings.session_capacity, settings.session_ttl);
    let ctx = Context::new(Arc::new(vehicles), sessions);

    let app = build_router(AppState::new(ctx, verifier));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", settings.port)).await?;
    info!("Listening on port {}", settings.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Hangar shut down cleanly.");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}
