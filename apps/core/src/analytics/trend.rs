//! Emotional trend analysis over the per-segment sentiment sequence.
//!
//! Linear-regression slope for direction and strength, mean absolute change
//! for volatility, run lengths per label, and first-seen peak/trough.

use serde::{Deserialize, Serialize};

use super::numeric::round_to;
use super::sentiment::{SegmentSentiment, SentimentLabel};

/// Slopes beyond ±this value are a trend rather than noise.
const SLOPE_THRESHOLD: f64 = 0.02;

/// Overall direction of sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl TrendDirection {
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Declining => "declining",
            TrendDirection::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalTrendAnalysis {
    pub direction: TrendDirection,
    /// 0-1
    pub strength: f64,
    pub slope: f64,
    pub longest_positive_run: usize,
    pub longest_negative_run: usize,
    /// 0-1
    pub volatility: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trough_index: Option<usize>,
}

impl Default for EmotionalTrendAnalysis {
    fn default() -> Self {
        Self {
            direction: TrendDirection::Stable,
            strength: 0.0,
            slope: 0.0,
            longest_positive_run: 0,
            longest_negative_run: 0,
            volatility: 0.0,
            peak_index: None,
            trough_index: None,
        }
    }
}

/// Least-squares slope of score against segment index
fn slope(segments: &[SegmentSentiment]) -> f64 {
    let n = segments.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
    for (i, seg) in segments.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += seg.score;
        sum_xy += x * seg.score;
        sum_x2 += x * x;
    }
    let denom = n * sum_x2 - sum_x * sum_x;
    if denom == 0.0 {
        return 0.0;
    }
    (n * sum_xy - sum_x * sum_y) / denom
}

fn longest_run(segments: &[SegmentSentiment], target: SentimentLabel) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for seg in segments {
        if seg.label == target {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Mean absolute consecutive delta, halved and capped at 1
fn volatility(segments: &[SegmentSentiment]) -> f64 {
    if segments.len() < 2 {
        return 0.0;
    }
    let total: f64 = segments
        .windows(2)
        .map(|pair| (pair[1].score - pair[0].score).abs())
        .sum();
    let avg_delta = total / (segments.len() - 1) as f64;
    (avg_delta / 2.0).clamp(0.0, 1.0)
}

/// Indexes of the first maximum and first minimum score
fn peak_and_trough(segments: &[SegmentSentiment]) -> Option<(usize, usize)> {
    let first = segments.first()?;
    let (mut peak, mut trough) = (0, 0);
    let (mut max, mut min) = (first.score, first.score);
    for (i, seg) in segments.iter().enumerate().skip(1) {
        if seg.score > max {
            max = seg.score;
            peak = i;
        }
        if seg.score < min {
            min = seg.score;
            trough = i;
        }
    }
    Some((peak, trough))
}

/// Analyze the emotional trend of a sentiment sequence
pub fn analyze_emotional_trend(by_segment: &[SegmentSentiment]) -> EmotionalTrendAnalysis {
    let Some((peak, trough)) = peak_and_trough(by_segment) else {
        return EmotionalTrendAnalysis::default();
    };

    let slope = slope(by_segment);
    let direction = if slope > SLOPE_THRESHOLD {
        TrendDirection::Improving
    } else if slope < -SLOPE_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };
    let strength = (slope.abs() * 10.0).min(1.0);

    EmotionalTrendAnalysis {
        direction,
        strength: round_to(strength, 2),
        slope: round_to(slope, 2),
        longest_positive_run: longest_run(by_segment, SentimentLabel::Positive),
        longest_negative_run: longest_run(by_segment, SentimentLabel::Negative),
        volatility: round_to(volatility(by_segment), 2),
        peak_index: Some(peak),
        trough_index: Some(trough),
    }
}
