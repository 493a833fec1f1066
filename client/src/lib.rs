//! # solo-client
//!
//! Leptos application shell for Solo: the typed route table, the shared API
//! client with its 401 interceptor, session state, feature flags, the nav
//! shell, and the page stubs.
//!
//! Built with `hydrate` for the browser bundle and with `ssr` for the host
//! that server-renders the first paint.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point called by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let config = config::AppConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level);
    log::debug!("hydrating solo ({})", config.environment);
    leptos::mount::hydrate_body(app::App);
}
