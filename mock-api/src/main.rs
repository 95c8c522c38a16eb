use mock_api::{
    AppState, Config, build,
    telemetry::{get_subscriber, init_subscriber, log_error},
};

/// Placeholder api server
///
/// Serves posts, users and albums from built-in fixtures. Environment
/// variables can be set directly or loaded from a .env file.
///
/// Required environment variables:
/// - IP_ADDRESS: Server bind address (127.0.0.1 for local, 0.0.0.0 for public)
/// - PORT: Server port (0 for an os-assigned port)
///
/// Optional:
/// - ALLOWED_ORIGINS: CORS origins ("*" by default, or a comma-separated list)
///
/// Example:
/// IP_ADDRESS=127.0.0.1 PORT=8000 cargo run -p mock-api
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // silently ignored if the file doesn't exist
    let _ = dotenvy::dotenv();

    init_subscriber(get_subscriber("info".into()))?;

    let mut config = Config::from_env().inspect_err(|e| {
        tracing::error!("{e:#}");
    })?;
    let server = build(&mut config, AppState::with_fixtures())?;
    tracing::info!("serving fixtures on http://{}:{}", config.ip, config.port);

    if let Err(e) = server.await {
        log_error(e);
    }
    Ok(())
}
