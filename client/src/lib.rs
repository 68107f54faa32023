//! # client
//!
//! Leptos + WASM front end for Holidaze: browse venues, check availability,
//! book stays, and manage venues as a host.
//!
//! This crate contains pages, components, session and page state, and the
//! browser transport for the [`api`] crate. Listing and availability rules
//! come from [`stays`]. Browser-only code sits behind the `csr` feature so the
//! crate also builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and the panic hook, then mount
/// the application on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::log_level());
    log::info!("holidaze client starting against {}", config::api_config().base_url);
    leptos::mount::mount_to_body(app::App);
}
