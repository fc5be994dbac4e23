//! Auth Session
//!
//! Bearer token persisted under `token` so a login survives restarts.

use crate::constants::TOKEN_KEY;
use crate::logic::storage::{KeyValueStore, StorageError};

pub struct AuthSession<S: KeyValueStore> {
    store: S,
    token: Option<String>,
}

impl<S: KeyValueStore> AuthSession<S> {
    /// Restore a saved token, if any. Never fails.
    pub fn initialize(store: S) -> Self {
        let token = match store.read(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read saved session: {}", e);
                None
            }
        };

        if token.is_some() {
            tracing::debug!("Restored saved session");
        }

        Self { store, token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Keep a new token in memory and on disk. The in-memory token is set
    /// even when the write fails.
    pub fn store_token(&mut self, token: String) -> Result<(), StorageError> {
        let saved = self.store.write(TOKEN_KEY, &token);
        self.token = Some(token);
        saved
    }

    /// Forget the token
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.token = None;
        self.store.remove(TOKEN_KEY)
    }
}
