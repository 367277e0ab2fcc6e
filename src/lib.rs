//! # leave-client
//!
//! Leptos + WASM frontend shell for the leave-management application.
//!
//! This crate owns routing, the route guard, the persisted session record,
//! and the profile fetch that follows a login. The leave, approval, and
//! profile screens are thin views over the shared session context; business
//! rules live in the remote API.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
