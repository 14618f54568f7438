//! # Analytics Module
//!
//! Rule-based, non-ML analysis of conversational text. Every component is a
//! pure synchronous function of its inputs and can be called on its own.
//!
//! ## Components
//! - `segmenter`: normalization and splitting into segments
//! - `lexicon`: sentiment word lists and the pluggable jargon/ambiguity analyzer
//! - `sentiment`: per-segment scoring and aggregation
//! - `tone_shift`: jumps between consecutive segments
//! - `clarity`: clarity indicators and the 0-100 clarity score
//! - `trend`: regression slope, volatility, runs, peak/trough
//! - `behavioral`: segment-length statistics
//! - `summaries`: natural-language insight summaries
//! - `visualization`: chart-ready payload
//! - `report`: reduced per-message projection
//! - `engine`: main orchestrator

pub mod behavioral;
pub mod clarity;
pub mod engine;
pub mod lexicon;
pub mod numeric;
pub mod report;
pub mod result;
pub mod segmenter;
pub mod sentiment;
pub mod summaries;
pub mod tone_shift;
pub mod trend;
pub mod visualization;

// Re-export main types for convenience
pub use behavioral::{compute_behavioral_signals, BehavioralExtractor, BehavioralSignals, BehavioralThresholds};
pub use clarity::{
    compute_clarity_score, generate_clarity_indicators, ClarityExtractor, ClarityGrade,
    ClarityIndicators, ClarityScore, ClarityThresholds,
};
pub use engine::{analyze, analyze_text, process_sentiment_results, SentimentEngine};
pub use lexicon::{AmbiguityFlag, LexicalAnalyzer, RegexLexicalAnalyzer, SentimentLexicon};
pub use numeric::round_to;
pub use report::AnalysisReport;
pub use result::{AnalyzeOptions, EngineInput, ExternalSentiment, ProcessedAnalytics, SentimentEngineResult};
pub use segmenter::{segment, Segmented};
pub use sentiment::{
    aggregate, score_segment, score_segments, SegmentSentiment, SentimentAggregate, SentimentLabel,
    SentimentScorer,
};
pub use summaries::{build_insight_summaries, InsightSummary, InsightType, Severity, SummaryInput};
pub use tone_shift::{detect_tone_shifts, ShiftDirection, ToneShift, ToneShiftOptions, ToneShiftOverrides};
pub use trend::{analyze_emotional_trend, EmotionalTrendAnalysis, TrendDirection};
pub use visualization::{build_visualization_insights, VisualizationInsights};
