//! # client
//!
//! Leptos + WASM frontend for the Edubox learning platform.
//!
//! Pages fetch JSON from the REST backend (`net::api`) and the managed
//! auth/database service (`net::supabase`), hand it to the `courseware`
//! view-model types, and render the result. The same crate is compiled with
//! `ssr` for the server shell and with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating edubox client");
    leptos::mount::hydrate_body(app::App);
}
