//! # newsdesk-client
//!
//! Network layer for newsdesk: the reqwest-based REST client, the
//! process-wide API key store, and the session/identity store.
//!
//! - [`api_key::ApiKeyStore`]: the mutable authorization key, anonymous by
//!   default, rendered as `PUIRESTAUTH apikey=<key>` on every request
//! - [`rest::NewsClient`]: login plus article list/detail/create/update/delete,
//!   with response-status classification into the typed error taxonomy
//! - [`session::SessionStore`]: at most one authenticated identity, plus a
//!   memoized user-id to display-name cache
//!
//! All network entry points are plain `async fn`s resolving exactly once
//! with a `Result`. Nothing in this crate retries.

#![deny(unsafe_code)]

pub mod api_key;
pub mod rest;
pub mod session;

pub use api_key::{ANONYMOUS_API_KEY, AUTH_SCHEME, ApiKeyStore};
pub use rest::NewsClient;
pub use session::{NameResolver, SessionStore};
