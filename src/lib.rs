//! # accounts-web
//!
//! Leptos + WASM frontend for account signup, login and a post-login
//! dashboard backed by an external auth API.
//!
//! This crate contains pages, form components, session persistence, the
//! validation rules, and the HTTP client used to reach the auth backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
