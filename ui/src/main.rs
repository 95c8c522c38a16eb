use std::rc::Rc;

use payloads::{APIClient, ClientConfig};
use ui::{ApiContext, App, AppProps};

fn main() {
    ui::logs::init_logging();

    // Baked in at build time, e.g.
    // API_URL=https://jsonplaceholder.typicode.com trunk build
    let config = match ClientConfig::from_value(option_env!("API_URL")) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            wasm_bindgen::throw_str(&e.to_string());
        }
    };
    tracing::info!("Using api at {}", config.base_url());

    let client = ApiContext(Rc::new(APIClient::new(&config)));
    yew::Renderer::<App>::with_props(AppProps { client }).render();
}
