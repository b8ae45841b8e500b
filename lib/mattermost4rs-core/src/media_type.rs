//! Media type matching.
//!
//! `Content-Type` values are parsed with the [`mime`] crate; this module only
//! adds the wildcard-aware comparison used when picking a body reader.

use mime::{Mime, STAR};

/// Whether two media types match, `*` in the type or subtype matching
/// anything. Parameters are ignored.
///
/// ```
/// use mattermost4rs_core::{is_compatible, mime};
///
/// let content_type: mime::Mime = "text/plain; charset=utf-8".parse().expect("media type");
/// assert!(is_compatible(&content_type, &mime::TEXT_PLAIN));
/// assert!(is_compatible(&content_type, &mime::TEXT_STAR));
/// assert!(!is_compatible(&content_type, &mime::APPLICATION_JSON));
/// ```
#[must_use]
pub fn is_compatible(left: &Mime, right: &Mime) -> bool {
    if left.type_() == STAR || right.type_() == STAR {
        return true;
    }
    left.type_() == right.type_()
        && (left.subtype() == STAR || right.subtype() == STAR || left.subtype() == right.subtype())
}
