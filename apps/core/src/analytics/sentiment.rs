//! Sentiment scoring and aggregation.
//!
//! Keyword counting against a [`SentimentLexicon`]. Each segment gets a score
//! in [-1, 1], a label and a confidence; the aggregate reduces them to one
//! overall score plus label ratios.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::lexicon::{tokenize, SentimentLexicon};
use super::numeric::{mean, ratio, round_to};

/// Scores above this are positive, below its negation negative.
pub const LABEL_THRESHOLD: f64 = 0.1;

/// Number of sentiment words at which confidence saturates.
const CONFIDENCE_SATURATION: f64 = 5.0;

/// Confidence reported when no sentiment word is found.
const NO_SIGNAL_CONFIDENCE: f64 = 0.5;

static DEFAULT_SCORER: LazyLock<SentimentScorer> = LazyLock::new(SentimentScorer::new);

/// Sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Apply the ±0.1 thresholding to a score.
    pub fn from_score(score: f64) -> Self {
        if score > LABEL_THRESHOLD {
            SentimentLabel::Positive
        } else if score < -LABEL_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Score of a single piece of text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// -1.0 (negative) to 1.0 (positive)
    pub score: f64,
    pub label: SentimentLabel,
    /// 0.0 - 1.0
    pub confidence: f64,
}

/// Score of one segment, tagged with its position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentSentiment {
    /// Zero-based segment index
    pub index: usize,
    pub score: f64,
    pub label: SentimentLabel,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    NO_SIGNAL_CONFIDENCE
}

/// Overall sentiment across all segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAggregate {
    pub overall_score: f64,
    pub label: SentimentLabel,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    pub neutral_ratio: f64,
    pub segment_count: usize,
}

impl Default for SentimentAggregate {
    fn default() -> Self {
        Self {
            overall_score: 0.0,
            label: SentimentLabel::Neutral,
            positive_ratio: 0.0,
            negative_ratio: 0.0,
            neutral_ratio: 1.0,
            segment_count: 0,
        }
    }
}

/// Keyword-counting sentiment scorer
#[derive(Debug, Clone, Default)]
pub struct SentimentScorer {
    lexicon: SentimentLexicon,
}

impl SentimentScorer {
    /// Create a scorer with the default English lexicon
    pub fn new() -> Self {
        Self::with_lexicon(SentimentLexicon::default())
    }

    /// Create a scorer with a custom lexicon
    pub fn with_lexicon(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    /// Count positive and negative lexicon hits in `text`
    fn count_matches(&self, text: &str) -> (usize, usize) {
        tokenize(text)
            .iter()
            .fold((0, 0), |(positive, negative), token| {
                (
                    positive + usize::from(self.lexicon.is_positive(token)),
                    negative + usize::from(self.lexicon.is_negative(token)),
                )
            })
    }

    /// Score a single segment
    pub fn score_segment(&self, text: &str) -> SentimentScore {
        let (positive, negative) = self.count_matches(text);
        let total = positive + negative;

        if total == 0 {
            return SentimentScore {
                score: 0.0,
                label: SentimentLabel::Neutral,
                confidence: NO_SIGNAL_CONFIDENCE,
            };
        }

        let raw = (positive as f64 - negative as f64) / total.max(1) as f64;
        let score = raw.clamp(-1.0, 1.0);
        let confidence = (total as f64 / CONFIDENCE_SATURATION).min(1.0);

        SentimentScore {
            score,
            label: SentimentLabel::from_score(score),
            confidence,
        }
    }

    /// Score every segment, preserving order
    pub fn score_segments<S: AsRef<str>>(&self, segments: &[S]) -> Vec<SegmentSentiment> {
        segments
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let SentimentScore {
                    score,
                    label,
                    confidence,
                } = self.score_segment(text.as_ref());
                SegmentSentiment {
                    index,
                    score,
                    label,
                    confidence,
                }
            })
            .collect()
    }
}

/// Score a single segment with the default lexicon
pub fn score_segment(text: &str) -> SentimentScore {
    DEFAULT_SCORER.score_segment(text)
}

/// Score all segments with the default lexicon
pub fn score_segments<S: AsRef<str>>(segments: &[S]) -> Vec<SegmentSentiment> {
    DEFAULT_SCORER.score_segments(segments)
}

/// Reduce per-segment scores into one aggregate
pub fn aggregate(by_segment: &[SegmentSentiment]) -> SentimentAggregate {
    if by_segment.is_empty() {
        return SentimentAggregate::default();
    }

    let n = by_segment.len();
    let scores: Vec<f64> = by_segment.iter().map(|s| s.score).collect();
    let overall = mean(&scores).clamp(-1.0, 1.0);
    let count = |label: SentimentLabel| by_segment.iter().filter(|s| s.label == label).count();

    SentimentAggregate {
        overall_score: round_to(overall, 2),
        label: SentimentLabel::from_score(overall),
        positive_ratio: round_to(ratio(count(SentimentLabel::Positive), n), 2),
        negative_ratio: round_to(ratio(count(SentimentLabel::Negative), n), 2),
        neutral_ratio: round_to(ratio(count(SentimentLabel::Neutral), n), 2),
        segment_count: n,
    }
}
