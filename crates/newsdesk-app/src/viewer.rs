//! Single-article viewer controller.
//!
//! Same fetch discipline as the list: a ticket per fetch, stale results
//! discarded after `detach`. Also holds the resolved author display name
//! so the renderer never blocks on the lookup.

use newsdesk_core::article::Article;
use newsdesk_core::errors::FetchError;
use tracing::debug;

use crate::list::FetchTicket;

/// State behind the article detail view.
#[derive(Debug, Default)]
pub struct ViewerController {
    article: Option<Article>,
    author_name: Option<String>,
    generation: u64,
    loading: bool,
    error: Option<String>,
}

impl ViewerController {
    /// Fresh controller with nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a detail fetch as started.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.error = None;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply a completed detail fetch; stale tickets are discarded.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<Article, FetchError>) {
        if ticket.generation != self.generation {
            debug!("discarding stale article response");
            return;
        }
        self.loading = false;
        match result {
            Ok(article) => {
                debug!(id = article.id, "article loaded");
                self.article = Some(article);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Tear the view down; any in-flight fetch becomes stale.
    pub fn detach(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    /// Store the author's resolved display name.
    pub fn set_author_name(&mut self, name: impl Into<String>) {
        self.author_name = Some(name.into());
    }

    /// The loaded article, if any.
    #[must_use]
    pub fn article(&self) -> Option<&Article> {
        self.article.as_ref()
    }

    /// Resolved author display name, if one was set.
    #[must_use]
    pub fn author_name(&self) -> Option<&str> {
        self.author_name.as_deref()
    }

    /// True while a fetch is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last fetch failure, if the view should show one.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
