// web_app/components/navbar.rs - Site navigation bar
//
// Brand, primary links, three dropdowns (search, community, profile), the
// search box and a row of decorative icons. Dropdown entries and the search
// box navigate through the router; logout is a plain anchor to home.

use leptos::prelude::*;
use leptos::web_sys::{KeyboardEvent, SubmitEvent};

use crate::web_app::navigation::{use_app_navigate, Route};
use crate::web_app::session::SharedSession;
use crate::web_app::state::menu::{COMMUNITY_ITEMS, PROFILE_ITEMS, SEARCH_ITEMS};
use crate::web_app::state::{search_submission, sign_out, Menu, MenuItem, MenuState};

const DROPDOWN_CLASS: &str =
    "absolute left-0 mt-2 w-48 bg-white border border-gray-200 rounded-md shadow-lg z-30";

/// Top navigation bar
///
/// Reads the signed-in user from the `SharedSession` context and re-reads it
/// after logout. Menu state is local to the bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let navigator = use_app_navigate();
    let session = use_context::<SharedSession>();
    let username = RwSignal::new(session.as_ref().and_then(|s| s.current_user()));

    let menus = RwSignal::new(MenuState::default());
    let draft = RwSignal::new(String::new());

    let close = move || menus.update(MenuState::close);

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(request) = draft.with_untracked(|d| search_submission(d)) {
            menus.update(MenuState::close);
            navigator.go(request);
        }
    };

    let on_logout = move |_| {
        let mut state = menus.get_untracked();
        let outcome = sign_out(&mut state, session.as_deref());
        menus.set(state);
        username.set(outcome.username);
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            close();
        }
    };

    view! {
        <nav class="navbar relative bg-amber-50 border-b border-amber-200" on:keydown=on_keydown>
            <div
                class=move || {
                    if menus.with(|m| m.open_menu().is_some()) { "fixed inset-0 z-20" } else { "hidden" }
                }
                on:click=move |_| close()
            ></div>

            <div class="container mx-auto px-4 h-16 flex items-center gap-6">
                <a href=Route::Home.path() class="text-2xl font-serif font-bold text-amber-900">
                    "Buena Leida"
                </a>

                <ul class="flex items-center gap-4 text-gray-700">
                    <li>
                        <a href=Route::Home.path() class="hover:text-amber-800">"Inicio"</a>
                    </li>
                    <li>
                        <a href=Route::MyBooks.path() class="hover:text-amber-800">"Mis Libros"</a>
                    </li>
                    <li class="relative">
                        <MenuTrigger menu=Menu::Search label="Buscar" menus=menus />
                        <MenuLinks menu=Menu::Search items=&SEARCH_ITEMS menus=menus />
                    </li>
                    <li class="relative">
                        <MenuTrigger menu=Menu::Community label="Comunidad" menus=menus />
                        <MenuLinks menu=Menu::Community items=&COMMUNITY_ITEMS menus=menus />
                    </li>
                </ul>

                <form class="flex-1 flex" on:submit=on_search>
                    <input
                        type="search"
                        class="w-full px-3 py-1.5 border border-gray-300 rounded-l-md focus:outline-none focus:ring-2 focus:ring-amber-600"
                        placeholder="Buscar libros"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="px-3 border border-l-0 border-gray-300 rounded-r-md bg-white hover:bg-gray-50"
                        aria-label="Buscar"
                    >
                        "🔍"
                    </button>
                </form>

                <div class="flex items-center gap-3 text-xl text-gray-600">
                    <span title="Notificaciones">"🔔"</span>
                    <span title="Discusiones de grupo">"💬"</span>
                    <span title="Mensajes">"✉"</span>
                    <span title="Amigos">"👥"</span>
                </div>

                <div class="relative">
                    <MenuTrigger menu=Menu::Profile label="👤" menus=menus />
                    <div class=move || dropdown_class(menus, Menu::Profile)>
                        <p class="px-4 py-2 font-semibold text-gray-900 border-b border-gray-100">
                            {move || username.get().unwrap_or_default()}
                        </p>
                        <MenuEntries items=&PROFILE_ITEMS menus=menus />
                        <a
                            href=Route::Home.path()
                            class="block px-4 py-2 text-gray-700 hover:bg-amber-50"
                            on:click=on_logout
                        >
                            "Cerrar sesión"
                        </a>
                    </div>
                </div>
            </div>
        </nav>
    }
}

fn dropdown_class(menus: RwSignal<MenuState>, menu: Menu) -> String {
    if menus.with(|m| m.is_open(menu)) {
        DROPDOWN_CLASS.to_string()
    } else {
        format!("{} hidden", DROPDOWN_CLASS)
    }
}

/// Button that opens one dropdown, replacing any other open one
#[component]
fn MenuTrigger(menu: Menu, label: &'static str, menus: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="hover:text-amber-800"
            aria-haspopup="true"
            aria-expanded=move || menus.with(|m| m.is_open(menu)).to_string()
            on:click=move |_| menus.update(|m| m.open(menu))
        >
            {label}
        </button>
    }
}

/// Dropdown panel holding a list of route links
#[component]
fn MenuLinks(
    menu: Menu,
    items: &'static [MenuItem],
    menus: RwSignal<MenuState>,
) -> impl IntoView {
    view! {
        <div class=move || dropdown_class(menus, menu)>
            <MenuEntries items=items menus=menus />
        </div>
    }
}

#[component]
fn MenuEntries(items: &'static [MenuItem], menus: RwSignal<MenuState>) -> impl IntoView {
    let navigator = use_app_navigate();

    items
        .iter()
        .map(|item| {
            let route = item.route;
            let on_select = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                let mut state = menus.get_untracked();
                let request = state.select(Some(route));
                menus.set(state);
                if let Some(request) = request {
                    navigator.go(request);
                }
            };
            view! {
                <a
                    href=route.path()
                    class="block px-4 py-2 text-gray-700 hover:bg-amber-50"
                    on:click=on_select
                >
                    {item.label}
                </a>
            }
        })
        .collect_view()
}
