// web_app/state/search.rs - Search page state
//
// States: Idle -> Loading -> Loaded | Empty(NotFound) | Empty(Failed),
// back to Loading on every submission.
//
// Requests are never cancelled. Each submission takes a ticket from
// SearchSequence and a response is only applied when its ticket is still
// the latest one, so a slow early response cannot overwrite a newer result.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::web_app::api::{CatalogClient, CatalogError, Lookup, SharedCatalog};
use crate::web_app::model::{Book, SearchType, SortMode};

/// A search the page wants to run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub search_type: SearchType,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, search_type: SearchType) -> Self {
        Self { query: query.into(), search_type }
    }

    /// Catalog lookup for this request. The user search type has no path of
    /// its own and goes through the title lookup.
    pub fn lookup(&self) -> Lookup {
        let term = self.query.clone();
        match self.search_type {
            SearchType::Combined => Lookup::Combined(term),
            SearchType::Author => Lookup::Author(term),
            SearchType::Title | SearchType::User => Lookup::Title(term),
        }
    }
}

/// Why a settled search has no books
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyCause {
    /// Catalog answered 404
    NotFound,
    /// Any other failure, swallowed
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Book>),
    Empty(EmptyCause),
}

impl SearchState {
    pub fn from_result(result: Result<Vec<Book>, CatalogError>) -> Self {
        match result {
            Ok(books) => SearchState::Loaded(books),
            Err(CatalogError::NotFound) => SearchState::Empty(EmptyCause::NotFound),
            Err(_) => SearchState::Empty(EmptyCause::Failed),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    pub fn books(&self) -> &[Book] {
        match self {
            SearchState::Loaded(books) => books,
            _ => &[],
        }
    }

    /// Settled with nothing to show; every cause gets the same message
    pub fn shows_empty_message(&self) -> bool {
        match self {
            SearchState::Loaded(books) => books.is_empty(),
            SearchState::Empty(_) => true,
            SearchState::Idle | SearchState::Loading => false,
        }
    }
}

/// Runs one lookup and folds the outcome into a state
pub async fn execute(client: &dyn CatalogClient, request: &SearchRequest) -> SearchState {
    let lookup = request.lookup();
    tracing::info!(
        "Search request: query='{}', type={:?}",
        request.query,
        request.search_type
    );

    let result = client.lookup(&lookup).await;
    match &result {
        Ok(books) => tracing::info!("Search successful: found {} books", books.len()),
        Err(CatalogError::NotFound) => tracing::info!("Search found no books"),
        Err(e) => tracing::warn!("Search failed, showing empty results: {}", e),
    }
    SearchState::from_result(result)
}

/// Takes a ticket now and returns the lookup to run. The outcome reaches
/// `apply` only if no later submission was issued while it was in flight;
/// the future resolves to whether it did.
pub fn run_latest(
    client: SharedCatalog,
    sequence: &SearchSequence,
    request: SearchRequest,
    apply: impl FnOnce(SearchState) + 'static,
) -> impl Future<Output = bool> + 'static {
    let ticket = sequence.issue();
    let sequence = sequence.clone();
    async move {
        let outcome = execute(client.as_ref(), &request).await;
        if sequence.is_current(ticket) {
            apply(outcome);
            true
        } else {
            tracing::debug!("Discarding stale response for '{}'", request.query);
            false
        }
    }
}

/// Submission ticket
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic ticket counter shared by all submissions of one page
#[derive(Clone, Debug, Default)]
pub struct SearchSequence {
    latest: Arc<AtomicU64>,
}

impl SearchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Search form controls
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchForm {
    pub query: String,
    pub search_type: SearchType,
    pub sort_mode: SortMode,
    pub sort_visible: bool,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            query: String::new(),
            search_type: SearchType::Combined,
            sort_mode: SortMode::Unset,
            sort_visible: true,
        }
    }
}

impl SearchForm {
    /// Picking "user" hides the sort selector and resets it to Default;
    /// any other type shows it again.
    pub fn select_search_type(&mut self, search_type: SearchType) {
        self.search_type = search_type;
        if search_type == SearchType::User {
            self.sort_visible = false;
            self.sort_mode = SortMode::Default;
        } else {
            self.sort_visible = true;
        }
    }

    /// A query handed over by navigation always runs as a combined search
    pub fn adopt_incoming(&mut self, query: impl Into<String>) -> SearchRequest {
        self.query = query.into();
        self.search_type = SearchType::Combined;
        self.request()
    }

    pub fn request(&self) -> SearchRequest {
        SearchRequest::new(self.query.clone(), self.search_type)
    }
}
