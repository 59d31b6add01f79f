//! # client
//!
//! Leptos + WASM frontend for the Tender-Hub procurement platform: the
//! marketing site, authentication flows and the role-gated dashboard.
//!
//! The logic-bearing pieces are the session store (`state::session`), the
//! access decision (`util::access`) and the route table (`routes`). Pages
//! and components are thin views over them.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
