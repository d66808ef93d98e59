// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Book wire format and the search/sort enumerations
// - config.rs: Catalog base address
// - api/: Remote catalog client (shared by client and server builds)
// - session.rs: Injected session capability (username + logout)
// - navigation.rs: Routes and transient navigation state
// - display.rs: Pure rendering rules (stars, labels, truncation, dates)
// - state/: Pure view state for the navbar and the search page
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod config;
pub mod api;
pub mod session;
pub mod navigation;
pub mod display;
pub mod state;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
