//! Route parsing for the front-end's navigation surface.
//!
//! Four views: the article list, a single-article viewer, the editor in
//! create mode, and the editor on an existing article. The empty path
//! redirects to the list.

use std::fmt;

/// A navigable view of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/list` — the filterable article list.
    List,
    /// `/view/:id` — single-article viewer.
    View(i64),
    /// `/edit/new` — editor for a fresh draft.
    EditNew,
    /// `/edit/:id` — editor on an existing article.
    Edit(i64),
}

impl Route {
    /// Parse a path into a route.
    ///
    /// Leading/trailing slashes are tolerated; the empty path redirects
    /// to [`Route::List`]. Returns `None` for anything unrecognized,
    /// including non-numeric ids.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Some(Self::List);
        }
        let mut segments = trimmed.split('/');
        let route = match (segments.next(), segments.next(), segments.next()) {
            (Some("list"), None, _) => Self::List,
            (Some("view"), Some(id), None) => Self::View(id.parse().ok()?),
            (Some("edit"), Some("new"), None) => Self::EditNew,
            (Some("edit"), Some(id), None) => Self::Edit(id.parse().ok()?),
            _ => return None,
        };
        Some(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "/list"),
            Self::View(id) => write!(f, "/view/{id}"),
            Self::EditNew => write!(f, "/edit/new"),
            Self::Edit(id) => write!(f, "/edit/{id}"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_four_views() {
        assert_eq!(Route::parse("/list"), Some(Route::List));
        assert_eq!(Route::parse("/view/5"), Some(Route::View(5)));
        assert_eq!(Route::parse("/edit/new"), Some(Route::EditNew));
        assert_eq!(Route::parse("/edit/5"), Some(Route::Edit(5)));
    }

    #[test]
    fn empty_path_redirects_to_list() {
        assert_eq!(Route::parse(""), Some(Route::List));
        assert_eq!(Route::parse("/"), Some(Route::List));
    }

    #[test]
    fn tolerates_missing_leading_slash() {
        assert_eq!(Route::parse("view/12"), Some(Route::View(12)));
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse("/nope"), None);
        assert_eq!(Route::parse("/view"), None);
        assert_eq!(Route::parse("/view/abc"), None);
        assert_eq!(Route::parse("/view/5/extra"), None);
        assert_eq!(Route::parse("/edit"), None);
    }

    #[test]
    fn display_round_trips() {
        for route in [Route::List, Route::View(9), Route::EditNew, Route::Edit(3)] {
            assert_eq!(Route::parse(&route.to_string()), Some(route));
        }
    }
}
