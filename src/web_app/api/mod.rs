// web_app/api/mod.rs - API module for the remote book catalog
//
// The catalog lives on another service; this module only knows how to build
// lookup URLs and how to read the responses.

pub mod catalog;

pub use catalog::{CatalogClient, CatalogError, HttpCatalog, Lookup, SharedCatalog};
