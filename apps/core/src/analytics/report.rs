//! Reduced analysis report.
//!
//! The compact per-message shape stored by the CRUD backend, projected from a
//! full [`SentimentEngineResult`] rather than computed by a second pipeline.

use serde::{Deserialize, Serialize};

use super::lexicon::AmbiguityFlag;
use super::result::SentimentEngineResult;
use super::sentiment::SentimentLabel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageScore {
    pub message_index: usize,
    pub label: SentimentLabel,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSection {
    pub scores: Vec<MessageScore>,
    pub aggregate: SentimentLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaritySection {
    pub readability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<AmbiguityFlag>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralSection {
    pub message_length_avg: f64,
    pub message_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportResults {
    pub sentiment: SentimentSection,
    pub clarity: ClaritySection,
    pub behavioral: BehavioralSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub results: ReportResults,
    pub model_version: String,
}

impl AnalysisReport {
    pub fn from_result(result: &SentimentEngineResult, model_version: &str) -> Self {
        let scores = result
            .sentiment_by_segment
            .iter()
            .map(|s| MessageScore {
                message_index: s.index,
                label: s.label,
                score: s.score,
            })
            .collect();

        let flags = &result.clarity_indicators.ambiguity_flags;

        Self {
            results: ReportResults {
                sentiment: SentimentSection {
                    scores,
                    aggregate: result.visualization.aggregate_summary.label,
                },
                clarity: ClaritySection {
                    readability: result.clarity_indicators.readability,
                    flags: (!flags.is_empty()).then(|| flags.clone()),
                },
                behavioral: BehavioralSection {
                    message_length_avg: result.behavioral_signals.avg_segment_length,
                    message_count: result.segment_count,
                },
            },
            model_version: model_version.to_string(),
        }
    }
}

impl From<&SentimentEngineResult> for AnalysisReport {
    fn from(result: &SentimentEngineResult) -> Self {
        Self::from_result(result, crate::config::DEFAULT_MODEL_VERSION)
    }
}
