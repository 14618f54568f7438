//! Insight summaries: short natural-language restatements of the derived
//! metrics, tagged with a type and an optional severity.
//!
//! Summaries never quote conversation text, only metrics and fixed phrasing.

use serde::{Deserialize, Serialize};

use super::behavioral::BehavioralSignals;
use super::clarity::ClarityScore;
use super::tone_shift::{ShiftDirection, ToneShift};
use super::trend::{EmotionalTrendAnalysis, TrendDirection};

/// Volatility above which an extra warning is emitted.
const HIGH_VOLATILITY: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    EmotionalTrend,
    Clarity,
    Behavioral,
    ToneShift,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Metric value attached to a summary for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InsightValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSummary {
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<InsightValue>,
}

impl InsightSummary {
    fn new(insight_type: InsightType, summary: String) -> Self {
        Self {
            insight_type,
            summary,
            severity: None,
            value: None,
        }
    }

    fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    fn value(mut self, value: InsightValue) -> Self {
        self.value = Some(value);
        self
    }
}

/// Everything the summarizer reads
#[derive(Debug, Clone, Copy)]
pub struct SummaryInput<'a> {
    pub emotional_trend_analysis: &'a EmotionalTrendAnalysis,
    pub clarity_score: &'a ClarityScore,
    pub behavioral_signals: &'a BehavioralSignals,
    pub tone_shifts: &'a [ToneShift],
    pub segment_count: usize,
}

fn percent(fraction: f64) -> String {
    format!("{:.0}", fraction * 100.0)
}

fn trend_summaries(input: &SummaryInput<'_>, out: &mut Vec<InsightSummary>) {
    let trend = input.emotional_trend_analysis;
    let n = input.segment_count;

    match trend.direction {
        TrendDirection::Stable => {
            if n > 1 {
                out.push(
                    InsightSummary::new(
                        InsightType::EmotionalTrend,
                        format!("Sentiment remains relatively stable across {n} segments."),
                    )
                    .value(InsightValue::Text(TrendDirection::Stable.label().to_string())),
                );
            }
        }
        direction => {
            let severity = if trend.strength > 0.5 {
                Severity::High
            } else if trend.strength > 0.2 {
                Severity::Medium
            } else {
                Severity::Low
            };
            let verb = if direction == TrendDirection::Improving {
                "improves"
            } else {
                "declines"
            };
            out.push(
                InsightSummary::new(
                    InsightType::EmotionalTrend,
                    format!("Sentiment {verb} over the conversation ({n} segments)."),
                )
                .severity(severity)
                .value(InsightValue::Text(direction.label().to_string())),
            );
        }
    }

    if trend.volatility > HIGH_VOLATILITY {
        out.push(
            InsightSummary::new(
                InsightType::EmotionalTrend,
                format!(
                    "High emotional volatility detected ({}% avg change between segments).",
                    percent(trend.volatility)
                ),
            )
            .severity(Severity::High)
            .value(InsightValue::Number(trend.volatility)),
        );
    }
}

fn clarity_summary(clarity: &ClarityScore) -> InsightSummary {
    let (advice, severity) = if clarity.score >= 80 {
        ("Communication is clear.", Severity::Low)
    } else if clarity.score >= 60 {
        (
            "Consider simplifying long sentences or reducing jargon.",
            Severity::Medium,
        )
    } else {
        ("Low clarity; review readability and ambiguity.", Severity::High)
    };

    InsightSummary::new(
        InsightType::Clarity,
        format!(
            "Clarity score: {}/100 ({}). {advice}",
            clarity.score, clarity.grade
        ),
    )
    .severity(severity)
    .value(InsightValue::Text(format!(
        "{} ({})",
        clarity.score, clarity.grade
    )))
}

fn behavioral_summaries(input: &SummaryInput<'_>, out: &mut Vec<InsightSummary>) {
    let signals = input.behavioral_signals;

    if signals.is_chatty {
        out.push(
            InsightSummary::new(
                InsightType::Behavioral,
                format!(
                    "Short, chatty message style (avg {} chars; {}% short segments).",
                    signals.avg_segment_length,
                    percent(signals.short_segment_ratio)
                ),
            )
            .value(InsightValue::Text("chatty".to_string())),
        );
    }
    if signals.is_essay_like {
        out.push(
            InsightSummary::new(
                InsightType::Behavioral,
                format!(
                    "Long-form style (avg {} chars; {}% long segments).",
                    signals.avg_segment_length,
                    percent(signals.long_segment_ratio)
                ),
            )
            .value(InsightValue::Text("essay_like".to_string())),
        );
    }
    if !signals.is_chatty && !signals.is_essay_like && input.segment_count > 0 {
        out.push(
            InsightSummary::new(
                InsightType::Behavioral,
                format!(
                    "Mixed message lengths (avg {} chars, {} segments).",
                    signals.avg_segment_length, input.segment_count
                ),
            )
            .value(InsightValue::Number(signals.avg_segment_length)),
        );
    }
}

fn tone_shift_summary(shifts: &[ToneShift]) -> Option<InsightSummary> {
    if shifts.is_empty() {
        return None;
    }
    let count = |direction: ShiftDirection| shifts.iter().filter(|s| s.direction == direction).count();
    let severity = match shifts.len() {
        3.. => Severity::High,
        1..=2 => Severity::Medium,
        _ => Severity::Low,
    };

    Some(
        InsightSummary::new(
            InsightType::ToneShift,
            format!(
                "{} tone shift(s) detected ({} improving, {} declining).",
                shifts.len(),
                count(ShiftDirection::Improving),
                count(ShiftDirection::Declining)
            ),
        )
        .severity(severity)
        .value(InsightValue::Number(shifts.len() as f64)),
    )
}

/// Build summaries in a fixed order: trend, volatility, clarity, behavioral, tone shifts.
pub fn build_insight_summaries(input: &SummaryInput<'_>) -> Vec<InsightSummary> {
    let mut summaries = Vec::new();

    trend_summaries(input, &mut summaries);
    summaries.push(clarity_summary(input.clarity_score));
    behavioral_summaries(input, &mut summaries);
    summaries.extend(tone_shift_summary(input.tone_shifts));

    summaries
}
