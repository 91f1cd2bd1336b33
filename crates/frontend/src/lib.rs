pub mod app;
pub mod domain;
pub mod shared;

use app::App;
use leptos::prelude::*;
use shared::config::AppConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = match AppConfig::from_location() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::warn!("Invalid query string, using default configuration: {}", e);
    }
    log::debug!("Configuration: {:?}", config);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
