// web_app/api/catalog.rs - Remote catalog client
//
// Three URL shapes against one base address:
//   GET {base}/books/{q}/{q}       combined search
//   GET {base}/books/title/{q}     title search
//   GET {base}/books/author/{q}    author search
//
// A 404 means "no books matched" and is reported as CatalogError::NotFound so
// the caller can tell it apart from real failures.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use thiserror::Error;

use crate::web_app::config::CatalogConfig;
use crate::web_app::model::Book;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no books matched the lookup")]
    NotFound,
    #[error("catalog answered with status {0}")]
    Status(u16),
    #[error("catalog request failed: {0}")]
    Transport(String),
    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
    #[error("invalid catalog base url: {0}")]
    InvalidBaseUrl(String),
}

/// A single catalog lookup
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Lookup {
    Combined(String),
    Title(String),
    Author(String),
}

impl Lookup {
    /// Path segments below the base address, unencoded
    pub fn path_segments(&self) -> Vec<&str> {
        match self {
            Lookup::Combined(q) => vec!["books", q.as_str(), q.as_str()],
            Lookup::Title(q) => vec!["books", "title", q.as_str()],
            Lookup::Author(q) => vec!["books", "author", q.as_str()],
        }
    }

    pub fn term(&self) -> &str {
        match self {
            Lookup::Combined(q) | Lookup::Title(q) | Lookup::Author(q) => q,
        }
    }

    /// Full request URL with percent-encoded segments
    pub fn url(&self, base: &str) -> Result<Url, CatalogError> {
        let mut url = Url::parse(base).map_err(|e| CatalogError::InvalidBaseUrl(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| CatalogError::InvalidBaseUrl(base.to_string()))?;
            segments.pop_if_empty();
            segments.extend(self.path_segments());
        }
        Ok(url)
    }
}

/// Catalog capability injected into the search page
///
/// Futures are not required to be Send: in the browser they run on the
/// single-threaded event loop.
#[async_trait(?Send)]
pub trait CatalogClient: Send + Sync {
    async fn lookup(&self, lookup: &Lookup) -> Result<Vec<Book>, CatalogError>;
}

pub type SharedCatalog = Arc<dyn CatalogClient>;

/// Production client over HTTP
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl CatalogClient for HttpCatalog {
    async fn lookup(&self, lookup: &Lookup) -> Result<Vec<Book>, CatalogError> {
        let url = lookup.url(self.config.base_url())?;
        tracing::info!("Catalog lookup: {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let books: Vec<Book> = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        tracing::info!("Catalog lookup returned {} books", books.len());
        Ok(books)
    }
}
