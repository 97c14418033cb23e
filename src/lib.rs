//! # simple-share-web
//!
//! Leptos + WASM browser client for the simple-share file/text/URL sharing
//! service.
//!
//! This crate contains pages, components, session state, the share password
//! cache, REST helpers for the backend API, and the navigation guard that
//! decides whether a route may render for the current identity.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::log_level());
    log::info!("simple-share web client starting (api base {})", config::API_BASE);
    leptos::mount::mount_to_body(app::App);
}
