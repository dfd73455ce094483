//! Authenticated identity as returned by the login endpoint.
//!
//! The service predates its own field-naming conventions, so the record
//! carries both the current lowercase fields and the capitalized legacy
//! aliases some deployments still emit. Legacy fields are all optional
//! and never required by newsdesk itself.

use serde::{Deserialize, Serialize};

/// An authenticated user's credential and display info.
///
/// A session either holds exactly one of these or nothing; there is no
/// partially-populated state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Internal user identifier.
    pub user: String,
    /// Group the credential belongs to.
    #[serde(rename = "group")]
    pub user_group: String,
    /// Login name.
    pub username: String,
    /// Pre-rendered authorization header value, unused by newsdesk
    /// (the key store renders its own) but kept for wire fidelity.
    #[serde(rename = "Authorization", default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    /// Opaque API key attached to authenticated requests.
    pub apikey: String,
    /// Credential expiry, opaque string on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    /// Legacy alias for `username`.
    #[serde(rename = "Username", default, skip_serializing_if = "Option::is_none")]
    pub legacy_username: Option<String>,
    /// Legacy password echo some deployments emit. Never read.
    #[serde(rename = "Password", default, skip_serializing_if = "Option::is_none")]
    pub legacy_password: Option<String>,
    /// Legacy alias for `apikey`.
    #[serde(rename = "API_Key", default, skip_serializing_if = "Option::is_none")]
    pub legacy_api_key: Option<String>,
    /// Display name, when the server provides one.
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Identity {
    /// The name to show for this identity: display name when present,
    /// otherwise the login name.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_minimal_response() {
        let identity: Identity = serde_json::from_value(json!({
            "user": "u1",
            "group": "g2",
            "username": "alice",
            "apikey": "KEY123"
        }))
        .unwrap();
        assert_eq!(identity.username, "alice");
        assert_eq!(identity.apikey, "KEY123");
        assert_eq!(identity.user_group, "g2");
        assert!(identity.legacy_api_key.is_none());
    }

    #[test]
    fn parses_legacy_aliases() {
        let identity: Identity = serde_json::from_value(json!({
            "user": "u1",
            "group": "g2",
            "username": "alice",
            "apikey": "KEY123",
            "Username": "alice",
            "API_Key": "KEY123",
            "Name": "Alice A."
        }))
        .unwrap();
        assert_eq!(identity.legacy_username.as_deref(), Some("alice"));
        assert_eq!(identity.label(), "Alice A.");
    }

    #[test]
    fn label_falls_back_to_username() {
        let identity: Identity = serde_json::from_value(json!({
            "user": "u1",
            "group": "g2",
            "username": "alice",
            "apikey": "KEY123"
        }))
        .unwrap();
        assert_eq!(identity.label(), "alice");
    }
}
