//! Engine input and output records.

use serde::{Deserialize, Serialize};

use super::behavioral::BehavioralSignals;
use super::clarity::{ClarityIndicators, ClarityScore};
use super::sentiment::SegmentSentiment;
use super::summaries::InsightSummary;
use super::tone_shift::{ToneShift, ToneShiftOverrides};
use super::trend::EmotionalTrendAnalysis;
use super::visualization::VisualizationInsights;

/// Raw text, optionally pre-segmented by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineInput {
    pub text: String,
    /// Overrides newline splitting when non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<String>>,
}

impl EngineInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            segments: None,
        }
    }

    pub fn with_segments(text: impl Into<String>, segments: Vec<String>) -> Self {
        Self {
            text: text.into(),
            segments: Some(segments),
        }
    }
}

/// Per-call options
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOptions {
    #[serde(default)]
    pub tone_shift: ToneShiftOverrides,
}

/// Full output of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentEngineResult {
    /// Overall score, -1 to 1
    pub sentiment_score: f64,
    pub sentiment_by_segment: Vec<SegmentSentiment>,
    pub tone_shifts: Vec<ToneShift>,
    pub clarity_indicators: ClarityIndicators,
    pub visualization: VisualizationInsights,
    pub emotional_trend_analysis: EmotionalTrendAnalysis,
    pub clarity_score: ClarityScore,
    pub behavioral_signals: BehavioralSignals,
    pub insight_summaries: Vec<InsightSummary>,
    pub segment_count: usize,
}

/// Sentiment computed elsewhere, fed back for post-processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSentiment {
    pub sentiment_by_segment: Vec<SegmentSentiment>,
    #[serde(default)]
    pub tone_shifts: Vec<ToneShift>,
    pub clarity_indicators: ClarityIndicators,
}

impl From<&SentimentEngineResult> for ExternalSentiment {
    fn from(result: &SentimentEngineResult) -> Self {
        Self {
            sentiment_by_segment: result.sentiment_by_segment.clone(),
            tone_shifts: result.tone_shifts.clone(),
            clarity_indicators: result.clarity_indicators.clone(),
        }
    }
}

/// Derived analytics only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedAnalytics {
    pub emotional_trend_analysis: EmotionalTrendAnalysis,
    pub clarity_score: ClarityScore,
    pub behavioral_signals: BehavioralSignals,
    pub insight_summaries: Vec<InsightSummary>,
}
