//! API key propagation for outgoing requests.
//!
//! The service authenticates every article request with an
//! `Authorization: PUIRESTAUTH apikey=<key>` header. The key is a
//! process-wide value: anonymous at startup, switched to a user key on
//! login, back to anonymous on logout. Requests read the key at call
//! time; rotating it mid-flight does not touch requests already sent.

use parking_lot::RwLock;

/// Well-known key for unauthenticated read access.
pub const ANONYMOUS_API_KEY: &str = "ANON02";

/// Authorization scheme the service expects.
pub const AUTH_SCHEME: &str = "PUIRESTAUTH";

/// The mutable authorization key shared by all outgoing requests.
///
/// Injectable rather than global: construct one at startup and hand an
/// `Arc` of it to the client and session store. Only the session store
/// mutates it.
#[derive(Debug)]
pub struct ApiKeyStore {
    active: RwLock<String>,
}

impl Default for ApiKeyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiKeyStore {
    /// Create a store holding the anonymous key.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: RwLock::new(ANONYMOUS_API_KEY.to_string()),
        }
    }

    /// Replace the active key with a user key.
    ///
    /// An empty key is ignored and the current key stays active, so a
    /// login response missing its key cannot strand the store in an
    /// unusable state.
    pub fn set_user_key(&self, key: &str) {
        if key.is_empty() {
            tracing::warn!("ignoring empty API key");
            return;
        }
        *self.active.write() = key.to_string();
        tracing::debug!("API key switched");
    }

    /// Switch back to the anonymous key.
    pub fn reset_to_anonymous(&self) {
        self.set_user_key(ANONYMOUS_API_KEY);
    }

    /// The key currently in effect.
    #[must_use]
    pub fn active_key(&self) -> String {
        self.active.read().clone()
    }

    /// True while no user key has been applied.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        *self.active.read() == ANONYMOUS_API_KEY
    }

    /// Render the authorization header value for the current key.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        format!("{AUTH_SCHEME} apikey={}", self.active.read())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
