pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate; the logger must exist
    // before the config is loaded so its warnings are not lost
    _ = console_log::init_with_level(shared::config::STARTUP_LOG_LEVEL);
    console_error_panic_hook::set_once();
    log::set_max_level(shared::config::max_level_filter(shared::config::config()));

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
