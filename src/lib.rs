//! # studyboard
//!
//! Leptos + WASM frontend for the student task tracker.
//!
//! This crate contains pages, the session store, the navigation guard, the
//! REST client, and the local-storage persistence layer. Browser-only code
//! is gated behind the `hydrate` feature so the core compiles and tests
//! natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point: set up panic/console logging and mount the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
