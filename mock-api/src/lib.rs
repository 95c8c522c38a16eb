pub mod faults;
pub mod fixtures;
pub mod routes;
pub mod store;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use std::net::TcpListener;

use crate::{faults::Faults, store::Store};

/// Shared handles to the data and fault registry of a server. Clones point
/// at the same server state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: Store,
    pub faults: Faults,
}

impl AppState {
    pub fn with_fixtures() -> Self {
        Self {
            store: Store::with_fixtures(),
            faults: Faults::default(),
        }
    }
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(config: &mut Config, state: AppState) -> std::io::Result<Server> {
    let store = web::Data::new(state.store);
    let faults = web::Data::new(state.faults);

    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        // the browser ui is served from another origin during development
        let cors = if allowed_origins.iter().any(|o| o == "*") {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
        } else {
            let mut cors =
                Cors::default().allow_any_method().allow_any_header();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(store.clone())
            .app_data(faults.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            ip: var("IP_ADDRESS").context("IP_ADDRESS is not defined")?,
            port: var("PORT")
                .context("PORT is not defined")?
                .parse()
                .context("PORT is not a port number")?,
            allowed_origins,
        })
    }
}
