//! Privacy helpers: content identity without retaining content, and
//! scrubbing of content-bearing fields before anything is logged.

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::analytics::segmenter::normalize;

/// Keys that may carry conversation content or credentials.
const UNSAFE_KEYS: &[&str] = &[
    "content",
    "body",
    "raw",
    "text",
    "message",
    "segments",
    "password",
    "token",
    "authorization",
];

/// SHA-256 hex digest of the normalized text, for deduplication and idempotency.
pub fn content_hash(text: &str) -> String {
    let digest = Sha256::digest(normalize(text).as_bytes());
    format!("{:x}", digest)
}

/// Drop unsafe keys (case-insensitive) from JSON objects at any depth,
/// including objects inside arrays. Scalars pass through.
pub fn sanitize_for_log(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| !UNSAFE_KEYS.contains(&key.to_lowercase().as_str()))
                .map(|(key, inner)| (key, sanitize_for_log(inner)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_for_log).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hash_ignores_outer_whitespace_and_crlf() {
        assert_eq!(content_hash("  a\r\nb  "), content_hash("a\nb"));
        assert_ne!(content_hash("a\nb"), content_hash("a\nc"));
        assert_eq!(content_hash("x").len(), 64);
    }

    #[test]
    fn test_known_digest() {
        assert_eq!(
            content_hash("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sanitize_drops_content_keys() {
        let clean = sanitize_for_log(json!({
            "Text": "secret",
            "segments": ["a"],
            "segmentCount": 2,
            "traceId": "t-1"
        }));
        assert_eq!(clean, json!({ "segmentCount": 2, "traceId": "t-1" }));
    }

    #[test]
    fn test_sanitize_passes_non_objects() {
        assert_eq!(sanitize_for_log(json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn test_sanitize_recurses_into_nested_values() {
        let clean = sanitize_for_log(json!({
            "meta": { "content": "secret", "source": "upload" },
            "history": [{ "Message": "hi", "index": 0 }, 3],
            "options": { "toneShift": { "minMagnitude": 0.5 } }
        }));
        assert_eq!(
            clean,
            json!({
                "meta": { "source": "upload" },
                "history": [{ "index": 0 }, 3],
                "options": { "toneShift": { "minMagnitude": 0.5 } }
            })
        );
    }
}
