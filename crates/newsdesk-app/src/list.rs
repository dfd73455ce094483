//! List view controller: fetched articles plus live filter state.
//!
//! The controller never performs network I/O itself. A caller asks for a
//! [`FetchTicket`], runs the fetch, and applies the result. Tickets carry
//! the controller's generation at issue time; [`ListController::detach`]
//! bumps the generation, so a response that resolves after navigation is
//! silently discarded — in-flight requests are never cancelled, only
//! ignored.

use newsdesk_core::article::Article;
use newsdesk_core::errors::FetchError;
use newsdesk_core::filter::{CATEGORY_ALL, FilterState};
use tracing::debug;

/// The fixed category set offered by the navigation bar.
pub const NAV_CATEGORIES: [&str; 6] = [
    CATEGORY_ALL,
    "National",
    "International",
    "Economy",
    "Sports",
    "Technology",
];

/// Proof that a fetch was started against a particular controller state.
///
/// Only a ticket from the current generation may mutate the controller.
#[derive(Debug, Clone, Copy)]
pub struct FetchTicket {
    pub(crate) generation: u64,
}

/// State behind the article list view.
#[derive(Debug, Default)]
pub struct ListController {
    articles: Vec<Article>,
    filter: FilterState,
    generation: u64,
    loading: bool,
    error: Option<String>,
}

impl ListController {
    /// Fresh controller: no articles, neutral filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as started and issue a ticket for its completion.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.error = None;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply a completed fetch.
    ///
    /// Stale tickets (issued before a [`detach`](Self::detach)) are
    /// discarded without touching any state. Errors are kept as a
    /// user-visible message; the previous articles stay on screen.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Article>, FetchError>) {
        if ticket.generation != self.generation {
            debug!("discarding stale article list response");
            return;
        }
        self.loading = false;
        match result {
            Ok(articles) => {
                debug!(count = articles.len(), "article list updated");
                self.articles = articles;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Tear the view down; any in-flight fetch becomes stale.
    pub fn detach(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    /// Select a category from the navigation bar.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    /// Update the free-text search string.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    /// Clear the free-text search.
    pub fn clear_search(&mut self) {
        self.filter.query.clear();
    }

    /// The articles to render, after category-then-text filtering.
    #[must_use]
    pub fn visible(&self) -> Vec<Article> {
        self.filter.apply(&self.articles)
    }

    /// All fetched articles, unfiltered.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Current filter selection.
    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
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
