//! # catalog
//!
//! Demo catalog for the `chat-widget` crate. Each story mounts a
//! `ChatWidget` next to a stateful harness that plays the host page: it owns
//! the message history and the presentation flags, and answers every user
//! message with a canned bot reply after a short delay.

pub mod app;
pub mod harness;
pub mod pages;
pub mod stories;

/// WASM entry point. Hydrates the server-rendered catalog.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
