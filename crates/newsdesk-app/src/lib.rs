//! # newsdesk-app
//!
//! View layer for the newsdesk front-end: route parsing and the three
//! view controllers (list, viewer, editor).
//!
//! Controllers are plain structs that bind user input to the core types
//! and hold the state a renderer displays. They own no network code:
//! callers start a fetch, perform it with `newsdesk-client`, and hand the
//! result back. A generation guard makes responses that resolve after
//! navigation (`detach`) a no-op instead of a crash or a stale mutation.

#![deny(unsafe_code)]

pub mod editor;
pub mod list;
pub mod routes;
pub mod viewer;

pub use editor::{EditorController, EditorMode};
pub use list::{FetchTicket, ListController, NAV_CATEGORIES};
pub use routes::Route;
pub use viewer::ViewerController;
