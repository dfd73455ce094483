//! The article filter engine: category and free-text predicates.
//!
//! Both filters are pure per-element predicates over an in-memory list.
//! They preserve relative order, are idempotent, and commute with each
//! other, so callers may compose them in either order (the list view
//! applies category first, then text).

use crate::article::Article;

/// Sentinel category meaning "no category filtering".
///
/// Matched case-sensitively: `"All"` disables the filter, `"all"` is an
/// ordinary (non-matching) category value.
pub const CATEGORY_ALL: &str = "All";

/// Does `article` belong to `category`, compared case-insensitively?
///
/// The sentinel is handled by [`filter_by_category`], not here.
#[must_use]
pub fn category_matches(article: &Article, category: &str) -> bool {
    article.category.eq_ignore_ascii_case(category)
}

/// Does any searchable field of `article` contain `needle`?
///
/// `needle` must already be trimmed and lowercased. Searchable fields are
/// title, abstract, subtitle, body, and category; absent optional fields
/// are skipped.
#[must_use]
pub fn text_matches(article: &Article, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);
    contains(&article.title)
        || contains(&article.abstract_text)
        || contains(&article.subtitle)
        || article.body.as_deref().is_some_and(contains)
        || contains(&article.category)
}

/// Keep the articles whose category matches `category` case-insensitively.
///
/// An empty string or the [`CATEGORY_ALL`] sentinel returns the input
/// unchanged. Relative order of matches is preserved.
#[must_use]
pub fn filter_by_category(articles: &[Article], category: &str) -> Vec<Article> {
    if category.is_empty() || category == CATEGORY_ALL {
        return articles.to_vec();
    }
    articles
        .iter()
        .filter(|a| category_matches(a, category))
        .cloned()
        .collect()
}

/// Keep the articles where some searchable field contains `query`.
///
/// The query is trimmed and lowercased first; if nothing remains, the
/// input is returned unchanged. Relative order is preserved.
#[must_use]
pub fn filter_by_text(articles: &[Article], query: &str) -> Vec<Article> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return articles.to_vec();
    }
    articles
        .iter()
        .filter(|a| text_matches(a, &needle))
        .cloned()
        .collect()
}

/// Live filter selection for a list view.
///
/// Not persisted; exists only while the list view does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Selected category; [`CATEGORY_ALL`] means no filtering.
    pub category: String,
    /// Free-text search string, applied after the category filter.
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CATEGORY_ALL.to_string(),
            query: String::new(),
        }
    }
}

impl FilterState {
    /// Apply both filters, category first.
    #[must_use]
    pub fn apply(&self, articles: &[Article]) -> Vec<Article> {
        filter_by_text(&filter_by_category(articles, &self.category), &self.query)
    }

    /// True when neither filter narrows anything.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        (self.category.is_empty() || self.category == CATEGORY_ALL)
            && self.query.trim().is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
