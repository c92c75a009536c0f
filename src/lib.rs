//! # rimalab
//!
//! Leptos + WASM single-page client for the rhyme generator: the user
//! enters keywords, the page posts them to a remote automation webhook,
//! and the returned rhymed text is rendered with lightweight `**bold**`
//! emphasis.
//!
//! This crate contains the page, components, application state, and the
//! webhook client. Browser-only concerns (HTTP, clipboard, timers) sit
//! behind the `hydrate` feature so the state machines and text helpers
//! stay natively testable.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
