// fixtures/fake_catalog.rs - Scripted catalog client
//
// Answers lookups from a table set up by the test and records every lookup it
// receives, in order. Lookups without a scripted answer get a 404.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::web_app::api::{CatalogClient, CatalogError, Lookup};
use crate::web_app::model::Book;

#[derive(Debug, Default)]
pub struct FakeCatalog {
    answers: Mutex<HashMap<Lookup, Result<Vec<Book>, CatalogError>>>,
    received: Mutex<Vec<Lookup>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the answer for one lookup
    pub fn answer(self, lookup: Lookup, result: Result<Vec<Book>, CatalogError>) -> Self {
        if let Ok(mut answers) = self.answers.lock() {
            answers.insert(lookup, result);
        }
        self
    }

    /// Lookups received so far, oldest first
    pub fn received(&self) -> Vec<Lookup> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl CatalogClient for FakeCatalog {
    async fn lookup(&self, lookup: &Lookup) -> Result<Vec<Book>, CatalogError> {
        if let Ok(mut received) = self.received.lock() {
            received.push(lookup.clone());
        }
        self.answers
            .lock()
            .map_err(|e| CatalogError::Transport(e.to_string()))?
            .get(lookup)
            .cloned()
            .unwrap_or(Err(CatalogError::NotFound))
    }
}
