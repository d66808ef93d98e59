// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, EmptyResults, StarRating)
// - navbar.rs: Site navigation bar with dropdowns and search box
// - search.rs: Search form components (SearchBar, SearchTypeToggle, SortDropdown)
// - book.rs: Book display components (BookCard, ResultsList)

pub mod book;
pub mod common;
pub mod navbar;
pub mod search;

// Re-export commonly used components for convenience
pub use book::*;
pub use common::*;
pub use navbar::NavBar;
pub use search::*;
