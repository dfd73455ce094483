//! Session and identity state.
//!
//! Holds at most one authenticated identity. Login delegates the network
//! call to [`NewsClient`] and, on success, stores the identity and
//! switches the shared key store to the identity's API key. A failed
//! re-login leaves any prior session intact. Logout clears the identity
//! and returns the key store to the anonymous key; it never fails and
//! makes no network call.
//!
//! The store also memoizes user-id to display-name lookups. Entries are
//! write-once for the cache's lifetime and dropped only by an explicit
//! clear, so rendering authorship never repeats a lookup.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use newsdesk_core::errors::AuthError;
use newsdesk_core::identity::Identity;

use crate::api_key::ApiKeyStore;
use crate::rest::NewsClient;

/// Collaborator that resolves a user id to a display name.
///
/// Optional: without one, the store falls back to `"User {id}"`.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Look up the display name for `user_id`, if the collaborator
    /// knows one.
    async fn display_name(&self, user_id: i64) -> Option<String>;
}

/// Process-wide session state: current identity plus the name cache.
pub struct SessionStore {
    identity: RwLock<Option<Identity>>,
    names: RwLock<HashMap<i64, String>>,
    keys: Arc<ApiKeyStore>,
    resolver: Option<Arc<dyn NameResolver>>,
}

impl SessionStore {
    /// Create an anonymous session bound to the shared key store.
    #[must_use]
    pub fn new(keys: Arc<ApiKeyStore>) -> Self {
        Self {
            identity: RwLock::new(None),
            names: RwLock::new(HashMap::new()),
            keys,
            resolver: None,
        }
    }

    /// Create a session with a display-name collaborator.
    #[must_use]
    pub fn with_resolver(keys: Arc<ApiKeyStore>, resolver: Arc<dyn NameResolver>) -> Self {
        Self {
            resolver: Some(resolver),
            ..Self::new(keys)
        }
    }

    /// Authenticate and adopt the returned identity.
    ///
    /// On success the identity replaces any prior one and its API key
    /// becomes the active key. On failure nothing changes: a valid
    /// session is not torn down because a re-login attempt failed.
    ///
    /// Overlapping logins are not deduplicated; whichever response is
    /// applied last wins.
    #[instrument(skip_all, fields(username = %username))]
    pub async fn login(
        &self,
        client: &NewsClient,
        username: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let identity = client.login(username, password).await?;
        self.keys.set_user_key(&identity.apikey);
        *self.identity.write() = Some(identity.clone());
        debug!(username = %identity.username, "session established");
        Ok(identity)
    }

    /// Drop the current identity and return to the anonymous key.
    ///
    /// Unconditional, synchronous, cannot fail. The display-name cache
    /// is left intact; clear it separately if needed.
    pub fn logout(&self) {
        *self.identity.write() = None;
        self.keys.reset_to_anonymous();
        debug!("session cleared");
    }

    /// True iff an identity is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.read().is_some()
    }

    /// Snapshot of the current identity, if any.
    #[must_use]
    pub fn current_identity(&self) -> Option<Identity> {
        self.identity.read().clone()
    }

    /// Resolve a display name for `user_id`, memoized.
    ///
    /// Cache hit returns the stored value. On a miss the collaborator is
    /// consulted (or the `"User {id}"` fallback used) and the result is
    /// stored write-once: if another resolution raced this one in, the
    /// first stored value is kept and returned.
    pub async fn resolve_display_name(&self, user_id: i64) -> String {
        if let Some(name) = self.names.read().get(&user_id) {
            return name.clone();
        }

        let resolved = match &self.resolver {
            Some(resolver) => resolver.display_name(user_id).await,
            None => None,
        }
        .unwrap_or_else(|| format!("User {user_id}"));

        self.names
            .write()
            .entry(user_id)
            .or_insert(resolved)
            .clone()
    }

    /// Empty the display-name cache. Safe at any time.
    pub fn clear_display_name_cache(&self) {
        self.names.write().clear();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
