//! Tone-shift detection: significant sentiment jumps between consecutive
//! (optionally smoothed) segments.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::numeric::round_to;
use super::sentiment::SegmentSentiment;

pub const DEFAULT_MIN_MAGNITUDE: f64 = 0.3;
pub const DEFAULT_WINDOW_SIZE: usize = 1;

/// Thresholds for tone-shift detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ToneShiftOptions {
    /// Minimum absolute score delta that counts as a shift. Compared before
    /// rounding, so with a threshold finer than 0.01 an emitted `magnitude`
    /// (rounded to 2 decimals) can fall just below it.
    #[validate(range(min = 0.0, max = 2.0))]
    pub min_magnitude: f64,
    /// Number of segments averaged around each index before comparing.
    #[validate(range(min = 1))]
    pub window_size: usize,
}

impl Default for ToneShiftOptions {
    fn default() -> Self {
        Self {
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

/// Per-call overrides; unset fields keep the configured value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneShiftOverrides {
    pub min_magnitude: Option<f64>,
    pub window_size: Option<usize>,
}

impl ToneShiftOptions {
    pub fn merged(&self, overrides: &ToneShiftOverrides) -> Self {
        Self {
            min_magnitude: overrides.min_magnitude.unwrap_or(self.min_magnitude),
            window_size: overrides.window_size.unwrap_or(self.window_size),
        }
    }
}

/// Direction of a detected shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDirection {
    Improving,
    Declining,
    Neutral,
}

/// A detected jump between two adjacent segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneShift {
    pub from_index: usize,
    pub to_index: usize,
    pub from_score: f64,
    pub to_score: f64,
    /// |to_score - from_score|
    pub magnitude: f64,
    pub direction: ShiftDirection,
}

/// Average score of the window starting `size / 2` before `center`,
/// clipped to the sequence bounds.
fn window_average(segments: &[SegmentSentiment], center: usize, size: usize) -> f64 {
    let start = center.saturating_sub(size / 2);
    let end = (start + size).min(segments.len());
    let window = segments.get(start..end).unwrap_or_default();
    if window.is_empty() {
        return 0.0;
    }
    window.iter().map(|s| s.score).sum::<f64>() / window.len() as f64
}

/// Detect tone shifts, ordered by `from_index`.
pub fn detect_tone_shifts(
    by_segment: &[SegmentSentiment],
    options: &ToneShiftOptions,
) -> Vec<ToneShift> {
    if by_segment.len() < 2 {
        return Vec::new();
    }

    (0..by_segment.len() - 1)
        .filter_map(|from_index| {
            let to_index = from_index + 1;
            let from_score = window_average(by_segment, from_index, options.window_size);
            let to_score = window_average(by_segment, to_index, options.window_size);
            let magnitude = (to_score - from_score).abs();

            if magnitude < options.min_magnitude {
                return None;
            }

            let direction = if to_score > from_score {
                ShiftDirection::Improving
            } else if to_score < from_score {
                ShiftDirection::Declining
            } else {
                ShiftDirection::Neutral
            };

            Some(ToneShift {
                from_index,
                to_index,
                from_score: round_to(from_score, 2),
                to_score: round_to(to_score, 2),
                magnitude: round_to(magnitude, 2),
                direction,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::sentiment::SentimentLabel;

    fn series(scores: &[f64]) -> Vec<SegmentSentiment> {
        scores
            .iter()
            .enumerate()
            .map(|(index, &score)| SegmentSentiment {
                index,
                score,
                label: SentimentLabel::from_score(score),
                confidence: 1.0,
            })
            .collect()
    }

    #[test]
    fn test_requires_two_segments() {
        assert!(detect_tone_shifts(&[], &ToneShiftOptions::default()).is_empty());
        assert!(detect_tone_shifts(&series(&[1.0]), &ToneShiftOptions::default()).is_empty());
    }

    #[test]
    fn test_detects_adjacent_shifts() {
        let shifts = detect_tone_shifts(&series(&[1.0, -1.0, -0.9, 0.5]), &ToneShiftOptions::default());
        assert_eq!(shifts.len(), 2);

        assert_eq!(shifts[0].from_index, 0);
        assert_eq!(shifts[0].to_index, 1);
        assert_eq!(shifts[0].magnitude, 2.0);
        assert_eq!(shifts[0].direction, ShiftDirection::Declining);

        assert_eq!(shifts[1].from_index, 2);
        assert_eq!(shifts[1].magnitude, 1.4);
        assert_eq!(shifts[1].direction, ShiftDirection::Improving);
    }

    #[test]
    fn test_small_changes_are_ignored() {
        let shifts = detect_tone_shifts(&series(&[0.0, 0.2, 0.4]), &ToneShiftOptions::default());
        assert!(shifts.is_empty());
    }

    #[test]
    fn test_custom_magnitude() {
        let options = ToneShiftOptions {
            min_magnitude: 0.1,
            window_size: 1,
        };
        let shifts = detect_tone_shifts(&series(&[0.0, 0.2, 0.4]), &options);
        assert_eq!(shifts.len(), 2);
        for shift in &shifts {
            assert!(shift.from_index < shift.to_index);
            assert!(shift.magnitude >= options.min_magnitude);
        }
    }

    #[test]
    fn test_windowed_average_stays_in_bounds() {
        let options = ToneShiftOptions {
            min_magnitude: 0.0,
            window_size: 3,
        };
        let shifts = detect_tone_shifts(&series(&[1.0, 1.0, -1.0, -1.0]), &options);
        assert_eq!(shifts.len(), 3);
        // index 0 window: [0..3) = 1, 1, -1
        assert_eq!(shifts[0].from_score, 0.33);
        // index 3 window: [2..4) = -1, -1
        assert_eq!(shifts[2].to_score, -1.0);
    }

    #[test]
    fn test_overrides_merge() {
        let base = ToneShiftOptions::default();
        let merged = base.merged(&ToneShiftOverrides {
            min_magnitude: Some(0.5),
            window_size: None,
        });
        assert_eq!(merged.min_magnitude, 0.5);
        assert_eq!(merged.window_size, 1);
    }
}
