// fixtures/shelves/mod.rs
//
// Each shelf is a struct implementing CatalogFixture.

pub mod tolkien;
pub mod mixed;

pub use mixed::MixedShelf;
pub use tolkien::TolkienShelf;
