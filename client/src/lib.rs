//! # client
//!
//! Leptos + WASM frontend for the sketchboard drawing surface.
//!
//! This crate contains the page shell, toolbar and canvas-host components,
//! shared UI state, and browser glue. It integrates with the `canvas` crate
//! for imperative stroke rendering via the `CanvasHost` bridge component.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and mounts the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}
