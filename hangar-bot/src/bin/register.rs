//! One-shot registration of the global slash commands.

use std::env;

use anyhow::Context as _;
use rustls::crypto::ring::default_provider;
use tracing::info;
use twilight_http::Client;
use twilight_model::id::{Id, marker::ApplicationMarker};

use hangar_commands::registry::command_definitions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let token = env::var("DISCORD_TOKEN")?;
    let application_id: Id<ApplicationMarker> = env::var("APP_ID")?
        .trim()
        .parse::<u64>()
        .ok()
        .and_then(Id::new_checked)
        .context("APP_ID must be a non-zero application id")?;

    let http = Client::new(token);
    let commands = command_definitions();

    // Bulk overwrite: commands missing from the list are removed
    let registered = http
        .interaction(application_id)
        .set_global_commands(&commands)
        .await?
        .models()
        .await?;

    info!(count = registered.len(), "registered global commands");
    Ok(())
}
