//! Dawn VA - single-page brochure site for a UK virtual assistant
//!
//! Server-rendered with Leptos and Axum, hydrated in the browser for the
//! scroll animations, the mobile menu and the mailto contact form.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
