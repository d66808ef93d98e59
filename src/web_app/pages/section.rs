// web_app/pages/section.rs - Pages for sections served by other front-ends
//
// Home, Mis Libros, the dropdown destinations and the book page belong to
// other parts of the site. These stand-ins give every navbar link a target.

use leptos::prelude::*;

use crate::web_app::navigation::{use_nav_query, NavQuery, Route};

/// Heading-only page for a navbar destination
#[component]
pub fn SectionPage(route: Route) -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <h1 class="text-3xl font-serif font-bold text-gray-900">{route.title()}</h1>
        </div>
    }
}

/// Book page; shows which book the search results pointed at
#[component]
pub fn BookPage() -> impl IntoView {
    let incoming = use_nav_query();
    let book_id = move || match incoming.get() {
        Some(NavQuery::BookId(id)) => Some(id),
        _ => None,
    };

    view! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <h1 class="text-3xl font-serif font-bold text-gray-900">{Route::Book.title()}</h1>
            {move || book_id().map(|id| view! {
                <p class="mt-2 text-gray-600">{format!("#{}", id)}</p>
            })}
        </div>
    }
}

/// 404 Not Found page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Página no encontrada"</p>
                <a
                    href=Route::Search.path()
                    class="px-6 py-3 bg-amber-700 text-white rounded-lg hover:bg-amber-800 transition-colors"
                >
                    "Ir a Buscar"
                </a>
            </div>
        </div>
    }
}
