//! # client
//!
//! Leptos UI for the property catalog: catalog, map and detail pages, the
//! auth/profile/add-listing dialogs, and the mock data behind them.
//!
//! All form, selection and formatting logic lives in plain Rust types
//! (`forms`, `state`, `util`) so it is testable natively; components are
//! thin views over them. Browser-only code (map provider, script loading)
//! is gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod forms;
pub mod mock;
pub mod pages;
pub mod state;
pub mod types;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
