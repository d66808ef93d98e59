// web_app/state/mod.rs - View state for the navbar and the search page
//
// Plain Rust structs holding what the components keep in signals, with the
// transitions as methods so they can be tested without a reactive runtime.

pub mod menu;
pub mod search;

pub use menu::{search_submission, sign_out, Menu, MenuItem, MenuState, SignOut};
pub use search::{
    execute, run_latest, EmptyCause, SearchForm, SearchRequest, SearchSequence, SearchState,
    Ticket,
};
