//! Conditional request support
//!
//! `ETag` generation and `If-None-Match` evaluation for the static and
//! gallery file routes.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Compute a strong `ETag` for file content.
///
/// The tag combines content length and a content hash, quoted per
/// RFC 9110, e.g. `"1a2b-9f8e7d"`.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}-{:x}\"", content.len(), hasher.finish())
}

/// Evaluate `If-None-Match` against the computed tag.
///
/// Returns true when the client's copy is current and a 304 should be
/// sent. Handles comma-separated candidate lists and the `*` wildcard.
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    let Some(header) = if_none_match else {
        return false;
    };
    header.split(',').map(str::trim).any(|candidate| candidate == "*" || candidate == etag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_is_quoted_and_deterministic() {
        let a = generate_etag(b"hello world");
        let b = generate_etag(b"hello world");
        assert_eq!(a, b);
        assert!(a.starts_with('"') && a.ends_with('"'));
    }

    #[test]
    fn test_etag_varies_with_content() {
        assert_ne!(generate_etag(b"content a"), generate_etag(b"content b"));
    }

    #[test]
    fn test_etag_embeds_length() {
        // 11 bytes -> "b-..." prefix inside the quotes
        let tag = generate_etag(b"hello world");
        assert!(tag.starts_with("\"b-"));
    }

    #[test]
    fn test_if_none_match_evaluation() {
        let etag = "\"b-abc123\"";
        assert!(check_etag_match(Some("\"b-abc123\""), etag));
        assert!(check_etag_match(Some("\"other\", \"b-abc123\""), etag));
        assert!(check_etag_match(Some("*"), etag));
        assert!(!check_etag_match(Some("\"different\""), etag));
        assert!(!check_etag_match(None, etag));
    }
}
