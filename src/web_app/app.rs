// web_app/app.rs - Root application component
//
// Sets up meta tags, the shared contexts (catalog client and session), the
// navbar and the routes below it. Contexts provided by an enclosing
// application are kept.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::api::{HttpCatalog, SharedCatalog};
use crate::web_app::components::NavBar;
use crate::web_app::config::CatalogConfig;
use crate::web_app::navigation::Route as AppRoute;
use crate::web_app::pages::{BookPage, NotFound, SearchPage, SectionPage};
use crate::web_app::session::{session_or_local, SharedSession};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    provide_context(session_or_local(use_context::<SharedSession>()));
    let catalog = use_context::<SharedCatalog>()
        .unwrap_or_else(|| Arc::new(HttpCatalog::new(CatalogConfig::default())));
    provide_context(catalog);

    view! {
        <Title text="Buena Leida" />
        <Meta name="description" content="Catálogo de libros, reseñas y listas de lectura" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/buena_leida_web.css" />

        <Router>
            <NavBar />
            <main class="min-h-screen bg-gray-50">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <SectionPage route=AppRoute::Home /> } />
                    <Route path=path!("/mybooks") view=|| view! { <SectionPage route=AppRoute::MyBooks /> } />
                    <Route
                        path=path!("/recommendations")
                        view=|| view! { <SectionPage route=AppRoute::Recommendations /> }
                    />
                    <Route path=path!("/lists") view=|| view! { <SectionPage route=AppRoute::Lists /> } />
                    <Route path=path!("/groups") view=|| view! { <SectionPage route=AppRoute::Groups /> } />
                    <Route path=path!("/quotes") view=|| view! { <SectionPage route=AppRoute::Quotes /> } />
                    <Route path=path!("/profile") view=|| view! { <SectionPage route=AppRoute::Profile /> } />
                    <Route path=path!("/search") view=SearchPage />
                    <Route path=path!("/book") view=BookPage />
                </Routes>
            </main>
        </Router>
    }
}
