//! Thumbnail-to-original URL upgrading.
//!
//! Wiki media servers insert a `thumb` path segment and a synthetic
//! resized-filename segment when serving thumbnails:
//! `<root>/thumb/<path-to-file>/<width>px-<file>`. Dropping both segments
//! reconstructs the full-resolution original at `<root>/<path-to-file>`.

const THUMB_SEGMENT: &str = "/thumb/";

/// Prefix `https:` onto scheme-less (usually protocol-relative) references.
pub fn ensure_scheme(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https:{}", raw)
    }
}

/// Rewrite a thumbnail URL to point at the full-resolution original.
///
/// URLs that follow the thumbnail convention `<root>/thumb/<path>/<file>`
/// are rewritten to `<root>/<path>`. Anything else passes through unchanged
/// apart from scheme normalization. Idempotent: the rewritten URL no longer
/// matches the convention.
pub fn upgrade_to_original(raw: &str) -> String {
    let url = ensure_scheme(raw);

    if let Some(idx) = url.find(THUMB_SEGMENT) {
        let root = &url[..idx];
        let rest = &url[idx + THUMB_SEGMENT.len()..];
        // The final segment is the resized filename; there must be at least
        // one real path segment in front of it for this to be a thumbnail.
        if let Some(cut) = rest.rfind('/') {
            return format!("{}/{}", root, &rest[..cut]);
        }
    }

    url
}
