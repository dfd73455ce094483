//! # newsdesk-core
//!
//! Foundation types for the newsdesk client: wire-exact article and
//! identity records, the pure article filter engine, the error taxonomy,
//! and image attachment validation.
//!
//! This crate provides the shared vocabulary the other newsdesk crates
//! depend on:
//!
//! - **Articles**: [`article::Article`], [`article::ArticleDraft`], and the
//!   explicit create/update [`article::Submission`] split
//! - **Identity**: [`identity::Identity`] with its legacy wire aliases
//! - **Filtering**: [`filter::filter_by_category`], [`filter::filter_by_text`],
//!   and [`filter::FilterState`]
//! - **Errors**: [`errors::AuthError`], [`errors::FetchError`],
//!   [`errors::ValidationError`] via `thiserror`
//! - **Images**: [`image::encode_image`] with size and media-type limits
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other newsdesk crates. No network
//! or async code lives here — everything is synchronous and pure.

#![deny(unsafe_code)]

pub mod article;
pub mod errors;
pub mod filter;
pub mod identity;
pub mod image;
