// lib.rs - Root module for the buena_leida_web library
//
// The domain logic (model, catalog client, session, display rules and view
// state) compiles without any feature so it can be unit tested natively.
// The Leptos components are compiled under `ssr` or `hydrate`.

/// The fixtures module contains reusable sample catalog data for tests
pub mod fixtures;

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: hydrates the server-rendered body
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
