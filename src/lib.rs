pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod session;
pub mod state;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
