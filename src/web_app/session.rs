// web_app/session.rs - Session capability
//
// Authentication is owned by another part of the application. The navbar only
// needs to read the username and to ask for a logout, so it depends on this
// narrow trait and receives an implementation through Leptos context.

use std::sync::{Arc, RwLock};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("no user is signed in")]
    NotSignedIn,
    #[error("session backend failed: {0}")]
    Backend(String),
}

pub trait SessionProvider: Send + Sync {
    /// Username of the signed-in user, if any
    fn current_user(&self) -> Option<String>;

    fn logout(&self) -> Result<(), AuthError>;
}

pub type SharedSession = Arc<dyn SessionProvider>;

/// In-memory session used when no external auth context is wired in
#[derive(Debug, Default)]
pub struct LocalSession {
    user: RwLock<Option<String>>,
}

impl LocalSession {
    pub fn signed_in(username: impl Into<String>) -> Self {
        Self {
            user: RwLock::new(Some(username.into())),
        }
    }
}

impl SessionProvider for LocalSession {
    fn current_user(&self) -> Option<String> {
        self.user.read().ok().and_then(|user| user.clone())
    }

    fn logout(&self) -> Result<(), AuthError> {
        let mut user = self
            .user
            .write()
            .map_err(|e| AuthError::Backend(e.to_string()))?;
        match user.take() {
            Some(name) => {
                tracing::info!("User '{}' signed out", name);
                Ok(())
            }
            None => Err(AuthError::NotSignedIn),
        }
    }
}

/// Session from an enclosing auth context, or an anonymous local one
pub fn session_or_local(outer: Option<SharedSession>) -> SharedSession {
    outer.unwrap_or_else(|| Arc::new(LocalSession::default()))
}
