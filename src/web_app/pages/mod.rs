// web_app/pages/mod.rs - Page components module
//
// - SearchPage: book search with results list
// - SectionPage / BookPage: stand-ins for the other navbar destinations
// - NotFound: fallback route

pub mod search;
pub mod section;

// Re-export page components
pub use search::SearchPage;
pub use section::{BookPage, NotFound, SectionPage};
