// web_app/components/search.rs - Search form components
//
// - SearchBar: query input, submit button, type toggle and sort selector
// - SearchTypeToggle: radio group over the four search types
// - SortDropdown: sort selector, hidden while the user type is picked

use leptos::prelude::*;

use crate::web_app::model::{SearchType, SortMode};
use crate::web_app::state::SearchForm;

/// Search bar component
///
/// All controls write into one `SearchForm` signal; submitting the form
/// triggers `on_search`.
#[component]
pub fn SearchBar(
    /// Form controls
    form: RwSignal<SearchForm>,
    /// Callback when search is triggered
    on_search: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(());
    };

    view! {
        <form on:submit=on_submit class="w-full">
            <div class="flex gap-3 mb-4">
                <input
                    type="text"
                    placeholder="Enter your search query"
                    class="flex-1 px-4 py-2 border-2 border-gray-200 rounded-lg \
                           focus:ring-4 focus:ring-amber-100 focus:border-amber-600 \
                           outline-none text-lg shadow-sm"
                    prop:value=move || form.with(|f| f.query.clone())
                    on:input=move |ev| form.update(|f| f.query = event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-6 py-2 bg-amber-700 text-white rounded-lg \
                           hover:bg-amber-800 active:bg-amber-900 font-semibold shadow-md"
                >
                    "Buscar"
                </button>
            </div>

            <div class="flex flex-wrap items-center justify-between gap-4">
                <SearchTypeToggle form=form />
                <SortDropdown form=form />
            </div>
        </form>
    }
}

/// Search type toggle
///
/// Exactly one of Todo / Título / Autor / Usuario is selected at a time.
#[component]
pub fn SearchTypeToggle(form: RwSignal<SearchForm>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-4" role="radiogroup">
            {SearchType::ALL.into_iter().map(|search_type| {
                let is_selected = move || form.with(|f| f.search_type == search_type);
                view! {
                    <label class="flex items-center gap-2 cursor-pointer">
                        <input
                            type="radio"
                            name="search_type"
                            value=search_type.value()
                            checked=is_selected
                            on:change=move |_| form.update(|f| f.select_search_type(search_type))
                            class="accent-amber-700"
                        />
                        <span class=move || {
                            if is_selected() {
                                "text-amber-800 font-semibold"
                            } else {
                                "text-gray-700"
                            }
                        }>
                            {search_type.label()}
                        </span>
                    </label>
                }
            }).collect_view()}
        </div>
    }
}

/// Sort selector
///
/// The chosen mode is kept on the form but not sent with the search.
#[component]
pub fn SortDropdown(form: RwSignal<SearchForm>) -> impl IntoView {
    let options = [(SortMode::Ranking, "Ranking"), (SortMode::Default, "Default")];

    view! {
        <div class=move || {
            if form.with(|f| f.sort_visible) {
                "flex items-center gap-2"
            } else {
                "hidden"
            }
        }>
            <label class="text-sm font-medium text-gray-600">"Ordenar"</label>
            <select
                class="text-sm border border-gray-300 rounded-md px-2 py-1 bg-white"
                on:change=move |ev| {
                    let mode = SortMode::from_value(&event_target_value(&ev));
                    form.update(|f| f.sort_mode = mode);
                }
            >
                <option value="" selected=move || form.with(|f| f.sort_mode == SortMode::Unset)>
                    "Seleccionar"
                </option>
                {options.into_iter().map(|(mode, label)| {
                    view! {
                        <option
                            value=mode.value()
                            selected=move || form.with(|f| f.sort_mode == mode)
                        >
                            {label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
