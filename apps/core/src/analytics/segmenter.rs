//! Segmentation: normalize raw text and split it into analyzable segments.
//!
//! Caller-supplied segments win over newline splitting. The result always
//! holds at least one segment so downstream stages never see an empty list.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Placeholder used when the input yields no text at all.
pub const EMPTY_PLACEHOLDER: &str = "(empty)";

// NOTE: expect() is acceptable here, the pattern is a literal.
static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("Invalid regex: newline run"));

/// Output of [`segment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segmented {
    /// Ordered, trimmed, non-empty segments (at least one).
    pub segments: Vec<String>,
    /// Character length of the normalized text.
    pub raw_length: usize,
}

/// Trim outer whitespace and convert CRLF line endings to LF.
pub fn normalize(text: &str) -> String {
    text.trim().replace("\r\n", "\n")
}

/// Split `text` into segments, preferring `explicit_segments` when non-empty.
pub fn segment(text: &str, explicit_segments: Option<&[String]>) -> Segmented {
    let normalized = normalize(text);
    let raw_length = normalized.chars().count();

    let parts: Vec<String> = match explicit_segments {
        Some(explicit) if !explicit.is_empty() => explicit
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => NEWLINE_RUN
            .split(&normalized)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    };

    let segments = if parts.is_empty() {
        vec![fallback(&normalized)]
    } else {
        parts
    };

    Segmented {
        segments,
        raw_length,
    }
}

fn fallback(normalized: &str) -> String {
    if normalized.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        normalized.to_string()
    }
}
