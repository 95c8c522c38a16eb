use std::time::Duration;

use mock_api::{
    AppState, Config,
    faults::Fault,
    store::Store,
    telemetry,
};
use payloads::{APIClient, ClientConfig, ClientError};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: APIClient,
    pub config: ClientConfig,
    pub state: AppState,
}

/// Fault injection and data seeding for the running mock api
impl TestApp {
    pub fn store(&self) -> &Store {
        &self.state.store
    }

    /// Make every request to `path` answer with `status` and an empty JSON
    /// object.
    pub async fn fail_with(&self, path: &str, status: u16) {
        self.state.faults.set(path, Fault::status(status)).await;
    }

    /// Make every request to `path` answer 200 with `raw` as the body.
    pub async fn respond_with_body(&self, path: &str, raw: &str) {
        self.state.faults.set(path, Fault::body(raw)).await;
    }

    /// Delay every response from `path` without changing it.
    pub async fn delay(&self, path: &str, delay: Duration) {
        self.state.faults.set(path, Fault::delay(delay)).await;
    }

    pub async fn reset_faults(&self) {
        self.state.faults.clear_all().await;
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let state = AppState::with_fixtures();
    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
    };

    let server = mock_api::build(&mut config, state.clone()).unwrap();
    tokio::spawn(server);

    let client_config =
        ClientConfig::new(&format!("http://127.0.0.1:{}", config.port))
            .unwrap();

    TestApp {
        port: config.port,
        client: APIClient::new(&client_config),
        config: client_config,
        state,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// A client for a port nothing is listening on.
pub fn unreachable_client() -> APIClient {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .unwrap()
        .port();
    // the listener is dropped here, freeing the port again
    let config = ClientConfig::new(&format!("http://127.0.0.1:{port}"))
        .expect("loopback address is a valid base url");
    APIClient::new(&config)
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(ClientError::Request { status, .. }) => {
            assert_eq!(status, expected)
        }
        Err(other) => panic!("Expected Request error, got {other:?}"),
        Ok(_) => panic!("Expected Request error, got a success"),
    };
}
