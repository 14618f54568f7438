//! Behavioral signals from segment lengths.
//!
//! Only character counts are inspected, never the wording.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use super::numeric::{ratio, round_to};

static DEFAULT_EXTRACTOR: LazyLock<BehavioralExtractor> = LazyLock::new(BehavioralExtractor::new);

/// Tunable cut-offs for the behavioral flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BehavioralThresholds {
    /// Segments at or below this length (chars) are short
    #[validate(range(min = 1))]
    pub short_segment_chars: usize,
    /// Segments at or above this length (chars) are long
    #[validate(range(min = 1))]
    pub long_segment_chars: usize,
    #[validate(range(min = 0.0, max = 1.0))]
    pub chatty_short_ratio: f64,
    #[validate(range(min = 0.0))]
    pub chatty_max_avg_length: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub essay_long_ratio: f64,
    #[validate(range(min = 0.0))]
    pub essay_min_avg_length: f64,
}

impl Default for BehavioralThresholds {
    fn default() -> Self {
        Self {
            short_segment_chars: 50,
            long_segment_chars: 200,
            chatty_short_ratio: 0.5,
            chatty_max_avg_length: 80.0,
            essay_long_ratio: 0.3,
            essay_min_avg_length: 150.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralSignals {
    /// Average segment length in characters
    pub avg_segment_length: f64,
    pub short_segment_ratio: f64,
    pub long_segment_ratio: f64,
    /// Population standard deviation of segment lengths
    pub length_std_dev: f64,
    pub segment_count: usize,
    pub total_length: usize,
    /// Many short messages
    pub is_chatty: bool,
    /// Many long messages
    pub is_essay_like: bool,
}

#[derive(Debug, Clone, Default)]
pub struct BehavioralExtractor {
    thresholds: BehavioralThresholds,
}

impl BehavioralExtractor {
    pub fn new() -> Self {
        Self::with_thresholds(BehavioralThresholds::default())
    }

    pub fn with_thresholds(thresholds: BehavioralThresholds) -> Self {
        Self { thresholds }
    }

    pub fn extract<S: AsRef<str>>(&self, segments: &[S]) -> BehavioralSignals {
        if segments.is_empty() {
            return BehavioralSignals::default();
        }

        let t = &self.thresholds;
        let n = segments.len();
        let lengths: Vec<usize> = segments.iter().map(|s| s.as_ref().chars().count()).collect();
        let total_length: usize = lengths.iter().sum();

        let avg_segment_length = round_to(total_length as f64 / n as f64, 1);
        let short_count = lengths.iter().filter(|&&l| l <= t.short_segment_chars).count();
        let long_count = lengths.iter().filter(|&&l| l >= t.long_segment_chars).count();
        let short_segment_ratio = round_to(ratio(short_count, n), 2);
        let long_segment_ratio = round_to(ratio(long_count, n), 2);

        // Spread is measured around the rounded average
        let variance = lengths
            .iter()
            .map(|&l| (l as f64 - avg_segment_length).powi(2))
            .sum::<f64>()
            / n as f64;
        let length_std_dev = round_to(variance.sqrt(), 1);

        BehavioralSignals {
            avg_segment_length,
            short_segment_ratio,
            long_segment_ratio,
            length_std_dev,
            segment_count: n,
            total_length,
            is_chatty: short_segment_ratio >= t.chatty_short_ratio
                && avg_segment_length < t.chatty_max_avg_length,
            is_essay_like: long_segment_ratio >= t.essay_long_ratio
                || avg_segment_length >= t.essay_min_avg_length,
        }
    }
}

/// Compute behavioral signals with the default thresholds
pub fn compute_behavioral_signals<S: AsRef<str>>(segments: &[S]) -> BehavioralSignals {
    DEFAULT_EXTRACTOR.extract(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_defaults() {
        let s = compute_behavioral_signals::<&str>(&[]);
        assert_eq!(s, BehavioralSignals::default());
        assert!(!s.is_chatty);
        assert!(!s.is_essay_like);
    }

    #[test]
    fn test_chatty_style() {
        let s = compute_behavioral_signals(&["hi", "ok cool", "sure thing", "lol"]);
        assert_eq!(s.segment_count, 4);
        assert_eq!(s.total_length, 22);
        assert_eq!(s.avg_segment_length, 5.5);
        assert_eq!(s.short_segment_ratio, 1.0);
        assert_eq!(s.long_segment_ratio, 0.0);
        assert!(s.is_chatty);
        assert!(!s.is_essay_like);
    }

    #[test]
    fn test_essay_style() {
        let long = "x".repeat(250);
        let s = compute_behavioral_signals(&[long.as_str(), long.as_str()]);
        assert_eq!(s.long_segment_ratio, 1.0);
        assert_eq!(s.length_std_dev, 0.0);
        assert!(s.is_essay_like);
        assert!(!s.is_chatty);
    }

    #[test]
    fn test_middle_lengths_are_neither() {
        let mid = "y".repeat(100);
        let s = compute_behavioral_signals(&[mid.as_str()]);
        assert_eq!(s.short_segment_ratio, 0.0);
        assert_eq!(s.long_segment_ratio, 0.0);
        assert!(!s.is_chatty);
        assert!(!s.is_essay_like);
    }

    #[test]
    fn test_population_std_dev() {
        let a = "a".repeat(10);
        let b = "b".repeat(30);
        let s = compute_behavioral_signals(&[a.as_str(), b.as_str()]);
        assert_eq!(s.avg_segment_length, 20.0);
        assert_eq!(s.length_std_dev, 10.0);
    }

    #[test]
    fn test_lengths_count_chars_not_bytes() {
        let s = compute_behavioral_signals(&["héllo"]);
        assert_eq!(s.total_length, 5);
    }

    #[test]
    fn test_custom_thresholds() {
        let extractor = BehavioralExtractor::with_thresholds(BehavioralThresholds {
            long_segment_chars: 5,
            ..BehavioralThresholds::default()
        });
        let s = extractor.extract(&["hello world"]);
        assert_eq!(s.long_segment_ratio, 1.0);
        assert!(s.is_essay_like);
    }

    #[test]
    fn test_short_boundary_is_inclusive() {
        let at = "s".repeat(50);
        let over = "s".repeat(51);
        assert_eq!(compute_behavioral_signals(&[at.as_str()]).short_segment_ratio, 1.0);

        let s = compute_behavioral_signals(&[over.as_str()]);
        assert_eq!(s.short_segment_ratio, 0.0);
        assert_eq!(s.long_segment_ratio, 0.0);
    }

    #[test]
    fn test_long_boundary_is_inclusive() {
        let under = "l".repeat(199);
        let at = "l".repeat(200);

        let s = compute_behavioral_signals(&[under.as_str()]);
        assert_eq!(s.short_segment_ratio, 0.0);
        assert_eq!(s.long_segment_ratio, 0.0);
        assert_eq!(compute_behavioral_signals(&[at.as_str()]).long_segment_ratio, 1.0);
    }
}
