// web_app/state/menu.rs - Navbar dropdown state
//
// One shared "which menu is open" value: opening a menu replaces whatever was
// open before, so at most one dropdown is ever visible.

use crate::web_app::navigation::{NavRequest, Route};
use crate::web_app::session::SessionProvider;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Menu {
    Search = 0,
    Community = 1,
    Profile = 2,
}

impl Menu {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Entry inside a dropdown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: Route,
}

pub const SEARCH_ITEMS: [MenuItem; 2] = [
    MenuItem { label: "Recomendaciones", route: Route::Recommendations },
    MenuItem { label: "Listas", route: Route::Lists },
];

pub const COMMUNITY_ITEMS: [MenuItem; 2] = [
    MenuItem { label: "Grupos", route: Route::Groups },
    MenuItem { label: "Citas", route: Route::Quotes },
];

pub const PROFILE_ITEMS: [MenuItem; 1] = [MenuItem { label: "Perfil", route: Route::Profile }];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: Option<Menu>,
}

impl MenuState {
    pub fn open(&mut self, menu: Menu) {
        self.open = Some(menu);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, menu: Menu) -> bool {
        self.open == Some(menu)
    }

    pub fn open_menu(&self) -> Option<Menu> {
        self.open
    }

    /// Closes the menu and hands back where to go, if anywhere
    pub fn select(&mut self, destination: Option<Route>) -> Option<NavRequest> {
        self.close();
        destination.map(NavRequest::to)
    }

    /// Closes the menu ahead of a logout; the caller always lands on home
    pub fn logout(&mut self) -> NavRequest {
        self.close();
        NavRequest::to(Route::Home)
    }
}

/// What the navbar shows after the profile menu's "Cerrar sesión"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignOut {
    pub request: NavRequest,
    /// User still reported by the session afterwards
    pub username: Option<String>,
}

/// Closes the menu, asks the session to log out and re-reads the user. A
/// failed logout is only logged; the bar keeps whatever the session reports.
pub fn sign_out(menus: &mut MenuState, session: Option<&dyn SessionProvider>) -> SignOut {
    let request = menus.logout();
    let username = session.and_then(|session| {
        if let Err(e) = session.logout() {
            tracing::debug!("Logout failed: {}", e);
        }
        session.current_user()
    });
    SignOut { request, username }
}

/// Navbar search box submission. Blank drafts go nowhere; otherwise the
/// draft is forwarded as typed.
pub fn search_submission(draft: &str) -> Option<NavRequest> {
    if draft.trim().is_empty() {
        None
    } else {
        Some(NavRequest::search(draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::navigation::NavQuery;

    #[test]
    fn test_starts_closed() {
        let state = MenuState::default();
        assert_eq!(state.open_menu(), None);
        assert!(!state.is_open(Menu::Search));
    }

    #[test]
    fn test_opening_replaces_previous_menu() {
        let mut state = MenuState::default();
        state.open(Menu::Search);
        state.open(Menu::Community);
        assert!(state.is_open(Menu::Community));
        assert!(!state.is_open(Menu::Search));
        assert_eq!(state.open_menu(), Some(Menu::Community));
    }

    #[test]
    fn test_select_with_and_without_destination() {
        let mut state = MenuState::default();
        state.open(Menu::Community);
        assert_eq!(state.select(Some(Route::Groups)), Some(NavRequest::to(Route::Groups)));
        assert_eq!(state.open_menu(), None);

        state.open(Menu::Search);
        assert_eq!(state.select(None), None);
        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn test_logout_closes_and_goes_home() {
        let mut state = MenuState::default();
        state.open(Menu::Profile);
        assert_eq!(state.logout().route, Route::Home);
        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn test_menu_indices() {
        assert_eq!(Menu::Search.index(), 0);
        assert_eq!(Menu::Community.index(), 1);
        assert_eq!(Menu::Profile.index(), 2);
    }

    #[test]
    fn test_search_submission() {
        assert_eq!(search_submission(""), None);
        assert_eq!(search_submission("   \t"), None);
        let request = search_submission(" Tolkien ").unwrap();
        assert_eq!(request.route, Route::Search);
        assert_eq!(request.query, Some(NavQuery::Text(" Tolkien ".into())));
    }

    #[test]
    fn test_menu_items() {
        assert_eq!(SEARCH_ITEMS[0].route.path(), "/recommendations");
        assert_eq!(SEARCH_ITEMS[1].route.path(), "/lists");
        assert_eq!(COMMUNITY_ITEMS[0].route.path(), "/groups");
        assert_eq!(COMMUNITY_ITEMS[1].route.path(), "/quotes");
        assert_eq!(PROFILE_ITEMS[0].route.path(), "/profile");
    }
}
