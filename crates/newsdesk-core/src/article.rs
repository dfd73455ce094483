//! Article wire types and the create/update submission split.
//!
//! Field names mirror the REST service exactly (`id_user`, `update_date`,
//! `image_data`, ...). The list endpoint returns articles without `body`
//! or `image_data` but with thumbnail fields; the detail endpoint is the
//! reverse. One record with optional fields covers both shapes.
//!
//! Creation and update share one POST endpoint upstream, discriminated by
//! whether the payload carries an `id`. Rather than sniffing id presence,
//! the split is explicit here: [`ArticleDraft`] has no id field at all, so
//! a draft can never be persisted with one, and [`Submission`] names the
//! intent.

use serde::{Deserialize, Serialize};

/// A news article as returned by the REST service.
///
/// `id` is server-assigned and always present on persisted articles.
/// Everything the list shape omits is `Option` and skipped on serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Server-assigned identifier.
    pub id: i64,
    /// Authoring user id, when the server reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_user: Option<i64>,
    /// Short summary shown in the list view.
    ///
    /// `abstract` is a Rust keyword, hence the rename.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Secondary headline.
    pub subtitle: String,
    /// Server-side update timestamp, opaque string on the wire.
    pub update_date: String,
    /// Legacy modification timestamp some responses carry.
    #[serde(
        rename = "modificationDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub modification_date: Option<String>,
    /// Topical tag from a small open set (`"Sports"`, `"Economy"`, ...).
    pub category: String,
    /// Main headline.
    pub title: String,
    /// Rich HTML body. Detail shape only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Base64 image payload. Detail shape only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    /// Media type for `image_data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_media_type: Option<String>,
    /// Base64 thumbnail payload. List shape only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_image: Option<String>,
    /// Media type for `thumbnail_image`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_media_type: Option<String>,
}

/// A not-yet-persisted article.
///
/// Structurally identical to [`Article`] minus the server-assigned fields.
/// Serializing a draft can never emit an `id`, which is what the create
/// endpoint requires.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticleDraft {
    /// Main headline.
    pub title: String,
    /// Secondary headline.
    pub subtitle: String,
    /// Short summary.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Topical tag.
    pub category: String,
    /// Rich HTML body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Base64 image payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    /// Media type for `image_data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_media_type: Option<String>,
}

/// An article write, with the create/update intent made explicit.
///
/// Serializes untagged: a `Create` is the bare draft object (no `id`),
/// an `Update` is the full article (with `id`). The service discriminates
/// on id presence, so the wire shape is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Submission {
    /// Create a new article; the server assigns the id.
    Create(ArticleDraft),
    /// Update an existing article in place.
    Update(Article),
}

impl Submission {
    /// The id this submission targets, if it targets an existing article.
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::Create(_) => None,
            Self::Update(article) => Some(article.id),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
