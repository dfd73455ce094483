//! Image attachment validation and base64 encoding.
//!
//! The editor attaches images to articles as base64 strings. Validation
//! happens here, locally and synchronously, before any network call:
//! payloads over [`MAX_IMAGE_BYTES`] or outside [`ALLOWED_IMAGE_TYPES`]
//! are rejected and never leave the process.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::errors::ValidationError;

/// Byte ceiling for image payloads (20 MiB), checked before encoding.
pub const MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;

/// Media types the service accepts for article images.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// A validated, base64-encoded image ready to attach to an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    /// Base64 payload, standard alphabet with padding.
    pub data: String,
    /// Media type from [`ALLOWED_IMAGE_TYPES`].
    pub media_type: String,
}

/// Validate raw image bytes and encode them for submission.
///
/// Size is checked first, then media type, so an oversized file of an
/// unsupported type reports the size problem.
pub fn encode_image(bytes: &[u8], media_type: &str) -> Result<ImageAttachment, ValidationError> {
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(ValidationError::OversizedImage {
            size: bytes.len(),
            limit: MAX_IMAGE_BYTES,
        });
    }
    if !ALLOWED_IMAGE_TYPES.contains(&media_type) {
        return Err(ValidationError::UnsupportedImageType {
            media_type: media_type.to_string(),
        });
    }
    Ok(ImageAttachment {
        data: BASE64.encode(bytes),
        media_type: media_type.to_string(),
    })
}

/// Guess a media type from a file extension (case-insensitive).
///
/// Used by callers that read images from disk. Returns `None` for
/// extensions outside the allowed set.
#[must_use]
pub fn media_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
