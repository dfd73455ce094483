//! Error taxonomy for the newsdesk client.
//!
//! Three domains, classified once at the boundary where they arise:
//!
//! - [`AuthError`]: login failures, classified from the login response status
//! - [`FetchError`]: article read/write failures, classified the same way
//! - [`ValidationError`]: local pre-submit checks (images), raised before
//!   any network call
//!
//! Nothing here retries. Callers surface these to the user and the
//! application stays interactive after any of them.

use thiserror::Error;

/// Login failure, classified from the login endpoint's response.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Bad credentials (HTTP 401).
    #[error("invalid username or password")]
    Unauthorized,

    /// Malformed login request (HTTP 400).
    #[error("malformed login request")]
    BadRequest,

    /// No response from the server at all (DNS, refused connection, ...).
    #[error("cannot reach the server")]
    NetworkUnreachable,

    /// Server-side failure (HTTP 5xx).
    #[error("server error ({status})")]
    Server {
        /// The 5xx status the server returned.
        status: u16,
    },

    /// Anything else, kept with its status and body for diagnostics.
    #[error("login failed ({status}): {message}")]
    Unknown {
        /// HTTP status of the unexpected response.
        status: u16,
        /// Response body, best-effort.
        message: String,
    },
}

/// Article read/write failure against the REST service.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The requested article does not exist (HTTP 404).
    #[error("article not found")]
    NotFound,

    /// Request rejected for the active API key (HTTP 401/403).
    #[error("request not authorized for the active API key")]
    Unauthorized,

    /// No response from the server at all.
    #[error("cannot reach the server")]
    NetworkUnreachable,

    /// Server-side failure (HTTP 5xx and unexpected statuses).
    #[error("server error ({status})")]
    Server {
        /// Status the server returned.
        status: u16,
    },

    /// The response arrived but its body did not parse as expected.
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Local validation failure, detected before any network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Image payload exceeds the fixed byte ceiling.
    #[error("image is {size} bytes, over the {limit}-byte limit")]
    OversizedImage {
        /// Size of the rejected payload.
        size: usize,
        /// The enforced ceiling.
        limit: usize,
    },

    /// Image media type outside the allowed set.
    #[error("unsupported image type: {media_type}")]
    UnsupportedImageType {
        /// The rejected media type.
        media_type: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
