//! # workforce-client
//!
//! Leptos + WASM frontend for the WorkForce employee portal.
//!
//! The crate is layered bottom-up: `config` and `util` hold pure helpers,
//! `net` owns the authenticated HTTP client and the per-endpoint calls,
//! `state` tracks the session credential, the resolved user and the route
//! guard, and `components`/`pages` render them. The root-level host binary
//! links this crate with the `ssr` feature; the browser bundle is built with
//! `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_helpers;

/// WASM entry point: install the panic hook and logger, then hydrate the
/// server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
