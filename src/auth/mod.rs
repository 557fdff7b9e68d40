//! Storage for the signed-in user's identity token

mod session;

use std::sync::{Arc, RwLock};

use log::{debug, info};

pub use session::*;

/// Shared handle to the current identity token
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    session: Arc<RwLock<Option<Session>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a token
    pub fn with_token(id_token: &str) -> Self {
        let store = Self::new();
        store.set(id_token);
        store
    }

    /// Replace the stored token
    pub fn set(&self, id_token: &str) {
        let session = Session::from_token(id_token);
        info!(
            "Storing identity token (subject: {:?}, expires_at: {:?})",
            session.user_id, session.expires_at
        );
        let mut current = self
            .session
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = Some(session);
    }

    /// Forget the stored token
    pub fn clear(&self) {
        debug!("Clearing identity token");
        let mut current = self
            .session
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = None;
    }

    /// The current session, expired or not
    pub fn session(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Token to send as bearer credentials, if one is stored and still valid
    pub fn bearer(&self) -> Option<String> {
        self.session()
            .filter(|session| !session.is_expired())
            .map(|session| session.id_token)
    }
}
