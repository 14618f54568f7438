//! Chart-ready projections of already computed results.

use serde::{Deserialize, Serialize};

use super::clarity::ClarityIndicators;
use super::numeric::round_to;
use super::sentiment::{aggregate, SegmentSentiment, SentimentAggregate, SentimentLabel};
use super::tone_shift::ToneShift;

/// One point on the sentiment-over-segments line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    pub index: usize,
    pub score: f64,
    pub label: SentimentLabel,
    /// Running average of scores up to and including this index
    pub cumulative_avg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// One-hot label counts for a stacked bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentStack {
    pub index: usize,
    pub positive: u8,
    pub neutral: u8,
    pub negative: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationInsights {
    pub time_series_data: Vec<TimeSeriesPoint>,
    pub aggregate_summary: SentimentAggregate,
    pub sentiment_distribution: SentimentDistribution,
    pub tone_shifts: Vec<ToneShift>,
    pub clarity_indicators: ClarityIndicators,
    pub segment_stacked_data: Vec<SegmentStack>,
}

/// Build the visualization payload
pub fn build_visualization_insights(
    by_segment: &[SegmentSentiment],
    tone_shifts: &[ToneShift],
    clarity_indicators: &ClarityIndicators,
) -> VisualizationInsights {
    let aggregate_summary = aggregate(by_segment);

    let mut running_total = 0.0;
    let time_series_data = by_segment
        .iter()
        .enumerate()
        .map(|(i, seg)| {
            running_total += seg.score;
            TimeSeriesPoint {
                index: seg.index,
                score: seg.score,
                label: seg.label,
                cumulative_avg: round_to(running_total / (i + 1) as f64, 2),
            }
        })
        .collect();

    let sentiment_distribution = SentimentDistribution {
        positive: aggregate_summary.positive_ratio,
        negative: aggregate_summary.negative_ratio,
        neutral: aggregate_summary.neutral_ratio,
    };

    let segment_stacked_data = by_segment
        .iter()
        .map(|seg| SegmentStack {
            index: seg.index,
            positive: u8::from(seg.label == SentimentLabel::Positive),
            neutral: u8::from(seg.label == SentimentLabel::Neutral),
            negative: u8::from(seg.label == SentimentLabel::Negative),
        })
        .collect();

    VisualizationInsights {
        time_series_data,
        aggregate_summary,
        sentiment_distribution,
        tone_shifts: tone_shifts.to_vec(),
        clarity_indicators: clarity_indicators.clone(),
        segment_stacked_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::clarity::generate_clarity_indicators;

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
    fn test_cumulative_average() {
        let by_segment = series(&[1.0, 0.0, -1.0, 0.5]);
        let viz = build_visualization_insights(&by_segment, &[], &generate_clarity_indicators(&["x"]));
        let avgs: Vec<f64> = viz.time_series_data.iter().map(|p| p.cumulative_avg).collect();
        assert_eq!(avgs, vec![1.0, 0.5, 0.0, 0.13]);
    }

    #[test]
    fn test_aggregate_matches_independent_call() {
        let by_segment = series(&[0.9, -0.4, 0.0]);
        let viz = build_visualization_insights(&by_segment, &[], &generate_clarity_indicators(&["x"]));
        assert_eq!(viz.aggregate_summary, aggregate(&by_segment));
        assert_eq!(viz.sentiment_distribution.positive, viz.aggregate_summary.positive_ratio);
    }

    #[test]
    fn test_stacked_data_is_one_hot() {
        let by_segment = series(&[0.9, -0.4, 0.0]);
        let viz = build_visualization_insights(&by_segment, &[], &generate_clarity_indicators(&["x"]));
        for stack in &viz.segment_stacked_data {
            assert_eq!(stack.positive + stack.neutral + stack.negative, 1);
        }
        assert_eq!(viz.segment_stacked_data[1].negative, 1);
    }

    #[test]
    fn test_empty_input() {
        let viz = build_visualization_insights(&[], &[], &generate_clarity_indicators::<&str>(&[]));
        assert!(viz.time_series_data.is_empty());
        assert_eq!(viz.aggregate_summary.neutral_ratio, 1.0);
    }
}
