//! # loading-ui
//!
//! Leptos components for loading, empty and error presentation: spinners,
//! skeleton placeholders, overlays, a display-state selector, and a
//! collapsible section card.
//!
//! Components emit utility-class markup only; the stylesheet is supplied by
//! the host application. The `app` module carries a gallery page rendering
//! every widget, used as the hydrate entry point and for SSR smoke checks.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered gallery.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) returns Err; the first logger stays active.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::Gallery);
}
