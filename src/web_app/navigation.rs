// web_app/navigation.rs - Routes and transient navigation state
//
// Navigation state is data handed to the next page alongside a route change
// without being written into the URL. It is stored in the history entry the
// navigation creates, so revisiting the entry restores it.

use serde::{Deserialize, Serialize};

/// Routes the navbar and the search page can send the user to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    MyBooks,
    Recommendations,
    Lists,
    Groups,
    Quotes,
    Profile,
    Search,
    Book,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Home,
        Route::MyBooks,
        Route::Recommendations,
        Route::Lists,
        Route::Groups,
        Route::Quotes,
        Route::Profile,
        Route::Search,
        Route::Book,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::MyBooks => "/mybooks",
            Route::Recommendations => "/recommendations",
            Route::Lists => "/lists",
            Route::Groups => "/groups",
            Route::Quotes => "/quotes",
            Route::Profile => "/profile",
            Route::Search => "/search",
            Route::Book => "/book",
        }
    }

    /// Heading shown by the placeholder page of routes owned elsewhere
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Inicio",
            Route::MyBooks => "Mis Libros",
            Route::Recommendations => "Recomendaciones",
            Route::Lists => "Listas",
            Route::Groups => "Grupos",
            Route::Quotes => "Citas",
            Route::Profile => "Perfil",
            Route::Search => "Buscar",
            Route::Book => "Libro",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

/// The `query` field carried to the next page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavQuery {
    /// Free-text search term for `/search`
    Text(String),
    /// Book identifier for `/book`
    BookId(i64),
}

impl NavQuery {
    /// Encoding stored in the history entry
    pub fn to_history(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Reads back a history entry; foreign or malformed state is ignored
    pub fn from_history(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// A route change plus optional navigation state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavRequest {
    pub route: Route,
    pub query: Option<NavQuery>,
}

impl NavRequest {
    pub fn to(route: Route) -> Self {
        Self { route, query: None }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            route: Route::Search,
            query: Some(NavQuery::Text(term.into())),
        }
    }

    pub fn book(id: i64) -> Self {
        Self {
            route: Route::Book,
            query: Some(NavQuery::BookId(id)),
        }
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use reactive::{use_app_navigate, use_nav_query, AppNavigator};

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod reactive {
    use leptos::prelude::*;
    use leptos_router::hooks::{use_location, use_navigate};
    use leptos_router::location::State;
    use leptos_router::NavigateOptions;

    use super::{NavQuery, NavRequest};

    type NavigateFn = Box<dyn Fn(&str, NavigateOptions)>;

    /// Router navigation that stores the request's query in the new
    /// history entry, so Back and Forward restore it
    #[derive(Clone, Copy)]
    pub struct AppNavigator(StoredValue<NavigateFn, LocalStorage>);

    impl AppNavigator {
        pub fn go(&self, request: NavRequest) {
            tracing::debug!("Navigating to {}", request.route.path());
            let options = NavigateOptions {
                state: history_state(request.query.as_ref()),
                ..Default::default()
            };
            self.0.with_value(|navigate| navigate(request.route.path(), options));
        }
    }

    pub fn use_app_navigate() -> AppNavigator {
        let navigate: NavigateFn = Box::new(use_navigate());
        AppNavigator(StoredValue::new_local(navigate))
    }

    /// Query of the current history entry
    pub fn use_nav_query() -> Signal<Option<NavQuery>> {
        let state = use_location().state;
        Signal::derive(move || state.with(read_state))
    }

    #[cfg(target_arch = "wasm32")]
    fn history_state(query: Option<&NavQuery>) -> State {
        use leptos::wasm_bindgen::JsValue;

        State::new(query.map(|q| JsValue::from_str(&q.to_history())))
    }

    #[cfg(target_arch = "wasm32")]
    fn read_state(state: &State) -> Option<NavQuery> {
        state
            .to_js_value()
            .as_string()
            .and_then(|raw| NavQuery::from_history(&raw))
    }

    // The server renders without history
    #[cfg(not(target_arch = "wasm32"))]
    fn history_state(_query: Option<&NavQuery>) -> State {
        State::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn read_state(_state: &State) -> Option<NavQuery> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Search.path(), "/search");
        assert_eq!(Route::Book.path(), "/book");
        for route in Route::ALL {
            assert!(route.path().starts_with('/'));
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/admin"), None);
    }

    #[test]
    fn test_nav_request_constructors() {
        assert_eq!(NavRequest::to(Route::Lists).query, None);
        assert_eq!(
            NavRequest::search("  dune "),
            NavRequest { route: Route::Search, query: Some(NavQuery::Text("  dune ".into())) }
        );
        assert_eq!(NavRequest::book(42).query, Some(NavQuery::BookId(42)));
    }

    #[test]
    fn test_history_encoding_restores_query() {
        for query in [NavQuery::Text(" el hobbit ".into()), NavQuery::BookId(42)] {
            assert_eq!(NavQuery::from_history(&query.to_history()), Some(query));
        }
    }

    #[test]
    fn test_foreign_history_state_is_ignored() {
        assert_eq!(NavQuery::from_history(""), None);
        assert_eq!(NavQuery::from_history("{\"scroll\": 120}"), None);
        assert_eq!(NavQuery::from_history("Tolkien"), None);
    }
}
