//! Article editor controller.
//!
//! Binds the form fields for both editor routes. The mode is explicit:
//! [`EditorMode::Create`] builds a draft with no id field, and
//! [`EditorMode::Edit`] carries the article being edited so the update
//! keeps its id and server-side timestamps. Image attachment validates
//! locally (size ceiling, allowed media types) before anything is sent.

use newsdesk_core::article::{Article, ArticleDraft, Submission};
use newsdesk_core::errors::ValidationError;
use newsdesk_core::image::{ImageAttachment, encode_image};

/// What the editor is editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// A fresh draft; the server will assign the id on create.
    Create,
    /// An existing article, updated in place.
    Edit(Article),
}

/// State behind the editor view.
#[derive(Debug)]
pub struct EditorController {
    mode: EditorMode,
    /// Main headline field.
    pub title: String,
    /// Secondary headline field.
    pub subtitle: String,
    /// Abstract field.
    pub abstract_text: String,
    /// Category field.
    pub category: String,
    /// Rich body field.
    pub body: String,
    image: Option<ImageAttachment>,
}

impl EditorController {
    /// Editor for a fresh draft (`/edit/new`).
    #[must_use]
    pub fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            title: String::new(),
            subtitle: String::new(),
            abstract_text: String::new(),
            category: String::new(),
            body: String::new(),
            image: None,
        }
    }

    /// Editor over an existing article (`/edit/:id`), fields prefilled.
    #[must_use]
    pub fn edit(article: Article) -> Self {
        let image = match (&article.image_data, &article.image_media_type) {
            (Some(data), Some(media_type)) => Some(ImageAttachment {
                data: data.clone(),
                media_type: media_type.clone(),
            }),
            _ => None,
        };
        Self {
            title: article.title.clone(),
            subtitle: article.subtitle.clone(),
            abstract_text: article.abstract_text.clone(),
            category: article.category.clone(),
            body: article.body.clone().unwrap_or_default(),
            image,
            mode: EditorMode::Edit(article),
        }
    }

    /// The editor's mode.
    #[must_use]
    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Validate and attach raw image bytes.
    ///
    /// Rejected payloads (too large, wrong media type) never replace an
    /// already-attached image and never reach the network.
    pub fn attach_image(&mut self, bytes: &[u8], media_type: &str) -> Result<(), ValidationError> {
        self.image = Some(encode_image(bytes, media_type)?);
        Ok(())
    }

    /// Remove the attached image.
    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// The currently attached image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&ImageAttachment> {
        self.image.as_ref()
    }

    /// Build the submission for the current fields.
    ///
    /// Create mode yields a [`Submission::Create`] whose payload has no id
    /// field at all; edit mode yields a [`Submission::Update`] of the
    /// original article with the edited fields applied. An empty body
    /// field is sent as absent, not as an empty string.
    #[must_use]
    pub fn build_submission(&self) -> Submission {
        let body = (!self.body.is_empty()).then(|| self.body.clone());
        let (image_data, image_media_type) = match &self.image {
            Some(img) => (Some(img.data.clone()), Some(img.media_type.clone())),
            None => (None, None),
        };

        match &self.mode {
            EditorMode::Create => Submission::Create(ArticleDraft {
                title: self.title.clone(),
                subtitle: self.subtitle.clone(),
                abstract_text: self.abstract_text.clone(),
                category: self.category.clone(),
                body,
                image_data,
                image_media_type,
            }),
            EditorMode::Edit(original) => {
                let mut article = original.clone();
                article.title = self.title.clone();
                article.subtitle = self.subtitle.clone();
                article.abstract_text = self.abstract_text.clone();
                article.category = self.category.clone();
                article.body = body;
                article.image_data = image_data;
                article.image_media_type = image_media_type;
                Submission::Update(article)
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use newsdesk_core::image::MAX_IMAGE_BYTES;

    fn existing() -> Article {
        Article {
            id: 57,
            id_user: Some(3),
            abstract_text: "old abs".into(),
            subtitle: "old sub".into(),
            update_date: "2024-01-01 10:00:00".into(),
            modification_date: None,
            category: "Tech".into(),
            title: "old title".into(),
            body: Some("old body".into()),
            image_data: None,
            image_media_type: None,
            thumbnail_image: None,
            thumbnail_media_type: None,
        }
    }

    #[test]
    fn create_mode_builds_a_draft() {
        let mut editor = EditorController::create();
        editor.title = "X".into();
        editor.category = "Tech".into();

        let submission = editor.build_submission();
        assert_eq!(submission.id(), None);
        assert_matches!(submission, Submission::Create(draft) => {
            assert_eq!(draft.title, "X");
            assert_eq!(draft.category, "Tech");
            assert_eq!(draft.body, None);
        });
    }

    #[test]
    fn edit_mode_prefills_and_keeps_id() {
        let mut editor = EditorController::edit(existing());
        assert_eq!(editor.title, "old title");
        assert_eq!(editor.body, "old body");

        editor.title = "new title".into();
        let submission = editor.build_submission();
        assert_eq!(submission.id(), Some(57));
        assert_matches!(submission, Submission::Update(article) => {
            assert_eq!(article.title, "new title");
            assert_eq!(article.update_date, "2024-01-01 10:00:00");
            assert_eq!(article.id_user, Some(3));
        });
    }

    #[test]
    fn empty_body_is_sent_as_absent() {
        let mut editor = EditorController::edit(existing());
        editor.body.clear();
        assert_matches!(editor.build_submission(), Submission::Update(article) => {
            assert_eq!(article.body, None);
        });
    }

    #[test]
    fn attached_image_flows_into_the_submission() {
        let mut editor = EditorController::create();
        editor.attach_image(b"abc", "image/png").unwrap();

        assert_matches!(editor.build_submission(), Submission::Create(draft) => {
            assert_eq!(draft.image_data.as_deref(), Some("YWJj"));
            assert_eq!(draft.image_media_type.as_deref(), Some("image/png"));
        });
    }

    #[test]
    fn oversized_image_is_rejected_before_submission() {
        let mut editor = EditorController::create();
        let bytes = vec![0u8; MAX_IMAGE_BYTES + 1];
        let err = editor.attach_image(&bytes, "image/png").unwrap_err();
        assert_matches!(err, ValidationError::OversizedImage { .. });
        assert!(editor.image().is_none());
    }

    #[test]
    fn rejected_image_keeps_the_previous_attachment() {
        let mut editor = EditorController::create();
        editor.attach_image(b"abc", "image/png").unwrap();
        let err = editor.attach_image(b"def", "image/tiff").unwrap_err();
        assert_matches!(err, ValidationError::UnsupportedImageType { .. });
        assert_eq!(editor.image().unwrap().data, "YWJj");
    }

    #[test]
    fn clear_image_detaches() {
        let mut editor = EditorController::create();
        editor.attach_image(b"abc", "image/png").unwrap();
        editor.clear_image();
        assert!(editor.image().is_none());
    }
}
