//! # feedback-widgets
//!
//! Leptos + WASM widgets for a site front-end: a chat panel that relays user
//! text to an inference route, and a comment board that stores name/comment/
//! rating entries in a Firestore collection and shows the average score.
//!
//! Each widget keeps its model in a plain state struct (`state`), talks to its
//! external service through a small trait (`net`), and renders through a
//! component (`components`). The two widgets share no state.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
