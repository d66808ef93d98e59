// tests/app_logic_tests.rs - Routing table, labels and configuration
//
// app.rs contains Leptos components (view macros), so we test the values it
// is built from: route paths, page headings, control labels and the catalog
// address.

use buena_leida_web::web_app::config::{CatalogConfig, ConfigError, DEFAULT_CATALOG_URL};
use buena_leida_web::web_app::model::{SearchType, SortMode};
use buena_leida_web::web_app::navigation::{NavQuery, NavRequest, Route};

#[test]
fn test_every_route_has_a_distinct_path() {
    let mut paths: Vec<&str> = Route::ALL.iter().map(|r| r.path()).collect();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), Route::ALL.len());
}

#[test]
fn test_navbar_destinations() {
    let expected = [
        (Route::Home, "/", "Inicio"),
        (Route::MyBooks, "/mybooks", "Mis Libros"),
        (Route::Recommendations, "/recommendations", "Recomendaciones"),
        (Route::Lists, "/lists", "Listas"),
        (Route::Groups, "/groups", "Grupos"),
        (Route::Quotes, "/quotes", "Citas"),
        (Route::Profile, "/profile", "Perfil"),
        (Route::Search, "/search", "Buscar"),
    ];
    for (route, path, title) in expected {
        assert_eq!(route.path(), path);
        assert_eq!(route.title(), title);
        assert_eq!(Route::from_path(path), Some(route));
    }
}

#[test]
fn test_unknown_paths_fall_through() {
    assert_eq!(Route::from_path("/search/"), None);
    assert_eq!(Route::from_path(""), None);
    assert_eq!(Route::from_path("/books"), None);
}

#[test]
fn test_book_link_carries_the_id() {
    let request = NavRequest::book(7);
    assert_eq!(request.route.path(), "/book");
    assert_eq!(request.query, Some(NavQuery::BookId(7)));
}

#[test]
fn test_history_entries_keep_search_and_book_apart() {
    let search = NavRequest::search("7").query.unwrap().to_history();
    let book = NavRequest::book(7).query.unwrap().to_history();
    assert_ne!(search, book);
    assert_eq!(NavQuery::from_history(&search), Some(NavQuery::Text("7".into())));
    assert_eq!(NavQuery::from_history(&book), Some(NavQuery::BookId(7)));
}

#[test]
fn test_search_type_controls() {
    let labels: Vec<&str> = SearchType::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Todo", "Título", "Autor", "Usuario"]);

    let values: Vec<&str> = SearchType::ALL.iter().map(|t| t.value()).collect();
    assert_eq!(values, vec!["todo", "title", "author", "user"]);

    assert_eq!(SearchType::default(), SearchType::Combined);
    assert_eq!(SearchType::from_value("isbn"), None);
}

#[test]
fn test_sort_selector_values() {
    assert_eq!(SortMode::default(), SortMode::Unset);
    assert_eq!(SortMode::from_value("rankings"), SortMode::Ranking);
    assert_eq!(SortMode::from_value("Default"), SortMode::Default);
    assert_eq!(SortMode::from_value(""), SortMode::Unset);
    assert_eq!(SortMode::Ranking.value(), "rankings");
}

#[test]
fn test_catalog_address_validation() {
    let config = CatalogConfig::new("https://catalogo.buenaleida.example/api").unwrap();
    assert_eq!(config.base_url(), "https://catalogo.buenaleida.example/api");

    assert!(matches!(
        CatalogConfig::new("localhost 3000"),
        Err(ConfigError::InvalidBaseUrl { .. })
    ));
    assert!(CatalogConfig::new("mailto:someone@example.com").is_err());
}

#[test]
fn test_default_catalog_address() {
    assert_eq!(DEFAULT_CATALOG_URL, "http://localhost:3000");
    assert!(CatalogConfig::new(DEFAULT_CATALOG_URL).is_ok());
    // Builds without CATALOG_API_URL use the default
    if option_env!("CATALOG_API_URL").is_none() {
        assert_eq!(CatalogConfig::default().base_url(), DEFAULT_CATALOG_URL);
    }
}
