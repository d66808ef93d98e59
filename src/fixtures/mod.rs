// fixtures/mod.rs - Test fixtures module
//
// Reusable catalog data and a scripted catalog client, shared by the unit
// tests and the integration tests under tests/.
//
// A shelf is a named set of books in the exact JSON shape the remote catalog
// returns, so the same text can be served by a stub HTTP server or decoded
// directly.

pub mod shelves;
pub mod fake_catalog;

pub use fake_catalog::FakeCatalog;
pub use shelves::{MixedShelf, TolkienShelf};

use crate::web_app::model::Book;

/// A fixed set of catalog records
pub trait CatalogFixture {
    /// The records as the catalog would send them
    fn catalog_json() -> &'static str;

    /// The records decoded into books
    fn books() -> Vec<Book> {
        serde_json::from_str(Self::catalog_json()).unwrap_or_default()
    }
}
