//! # worklink-client
//!
//! Leptos + WASM frontend shell for WorkLink.
//!
//! Wires the `worklink` session core to the browser: `localStorage` for the
//! durable session, Firebase for Google sign-in, and a signal bridge so route
//! guards and pages re-render when the session changes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
