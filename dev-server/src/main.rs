//! Development server for the placeholder board UI
//!
//! With `API_URL` unset (in the environment or `.env`), this binary runs the
//! mock api with fixture data so the frontend can be developed without
//! reaching the public api. With `API_URL` set, it checks that api instead
//! and prints the command that points the ui at it.
//!
//! Usage: cargo run -p dev-server
//!
//! Set DEV_SERVER_PORT to pin the mock's port (an OS-assigned port is used
//! otherwise).

use anyhow::{Context, Result};
use dev_server::{Upstream, check_upstream};
use payloads::APIClient;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    let subscriber = mock_api::telemetry::get_subscriber("info".into());
    mock_api::telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting placeholder board development server");

    let config = match Upstream::from_env()? {
        Upstream::Configured(config) => {
            info!("🔗 Using configured api at {}", config.base_url());
            config
        }
        Upstream::Mock => {
            let port = match std::env::var("DEV_SERVER_PORT") {
                Ok(port) => {
                    port.parse().context("DEV_SERVER_PORT is not a port")?
                }
                Err(_) => 0,
            };
            let app = test_helpers::spawn_app_on_port(port).await;
            info!("✅ Mock api running on {}", app.config.base_url());
            app.config
        }
    };

    // make sure the upstream is actually reachable before advertising it
    let inventory = check_upstream(&APIClient::new(&config)).await?;
    info!(
        "📊 Serving {} posts, {} users, {} albums",
        inventory.posts, inventory.users, inventory.albums
    );
    info!(
        "   UI:  cd ui && {}={} trunk serve",
        payloads::API_URL_VAR,
        config.base_url()
    );
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
