//! # client
//!
//! Leptos + WASM frontend for the LiveText marketing site.
//!
//! This crate contains the landing page, its presentational components,
//! the dark-mode preference state, and the browser glue that persists the
//! preference to `localStorage`. It compiles three ways: natively as an
//! `rlib` for tests, with `ssr` for server-side rendering, and with
//! `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach event listeners to the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
