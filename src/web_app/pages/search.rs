// web_app/pages/search.rs - Search page component
//
// Composes the search form and the results area and drives the search
// lifecycle: every submission moves the page to Loading and issues a ticket;
// only the response holding the latest ticket is applied.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::{HttpCatalog, SharedCatalog};
use crate::web_app::components::*;
use crate::web_app::config::CatalogConfig;
use crate::web_app::navigation::{use_nav_query, NavQuery};
use crate::web_app::state::{run_latest, SearchForm, SearchRequest, SearchSequence, SearchState};

/// Main search page component
///
/// A search term carried by the history entry (the navbar search box) is
/// adopted as a combined search and run on arrival.
#[component]
pub fn SearchPage() -> impl IntoView {
    let catalog = use_context::<SharedCatalog>()
        .unwrap_or_else(|| Arc::new(HttpCatalog::new(CatalogConfig::default())));
    let incoming = use_nav_query();

    let form = RwSignal::new(SearchForm::default());
    let state = RwSignal::new(SearchState::Idle);
    let sequence = SearchSequence::new();

    let run_search = Callback::new(move |request: SearchRequest| {
        state.set(SearchState::Loading);
        // The page may be gone by the time the response lands
        let applied = run_latest(catalog.clone(), &sequence, request, move |outcome| {
            let _ = state.try_set(outcome);
        });
        spawn_local(async move {
            applied.await;
        });
    });

    let on_search = Callback::new(move |()| {
        run_search.run(form.with_untracked(SearchForm::request));
    });

    Effect::new(move |_| {
        if let Some(NavQuery::Text(term)) = incoming.get() {
            let mut next = form.get_untracked();
            let request = next.adopt_incoming(term);
            form.set(next);
            run_search.run(request);
        }
    });

    view! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <h1 class="text-3xl font-serif font-bold text-gray-900 mb-6">"Buscar"</h1>

            <section class="bg-white rounded-xl shadow-sm p-6 mb-8 border border-gray-100">
                <SearchBar form=form on_search=on_search />
            </section>

            <section aria-live="polite">
                {move || {
                    if state.with(SearchState::is_loading) {
                        view! { <Loading /> }.into_any()
                    } else if state.with(SearchState::shows_empty_message) {
                        view! { <EmptyResults /> }.into_any()
                    } else {
                        let books = state.with(|s| s.books().to_vec());
                        view! { <ResultsList books=books /> }.into_any()
                    }
                }}
            </section>
        </div>
    }
}
