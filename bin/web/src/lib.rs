//! waypoint web application.
//!
//! This crate provides the Leptos-based application shell: a router with
//! a login view at `/`, a profile view at `/profile` and an explicit
//! not-found fallback for every other path.

#![allow(non_snake_case)]

pub mod app;
#[cfg(feature = "ssr")]
pub mod config;
pub mod navigation;
pub mod pages;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
