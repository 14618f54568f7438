//! Sentiment Engine - orchestrator for the analytics pipeline.
//!
//! Runs segmentation, scoring, aggregation, tone-shift detection, clarity,
//! trend, behavioral signals, visualization and summaries in dependency
//! order, threading each stage's output into the next.
//!
//! Only counts and derived metrics are logged, never input text.

use std::sync::{Arc, LazyLock};
use std::time::Instant;
use tracing::{debug, warn};
use validator::Validate;

use super::behavioral::BehavioralExtractor;
use super::clarity::{compute_clarity_score, ClarityExtractor};
use super::lexicon::{LexicalAnalyzer, RegexLexicalAnalyzer, SentimentLexicon};
use super::report::AnalysisReport;
use super::result::{
    AnalyzeOptions, EngineInput, ExternalSentiment, ProcessedAnalytics, SentimentEngineResult,
};
use super::segmenter::segment;
use super::sentiment::{aggregate, SentimentScorer};
use super::summaries::{build_insight_summaries, SummaryInput};
use super::tone_shift::{detect_tone_shifts, ToneShiftOptions};
use super::trend::analyze_emotional_trend;
use super::visualization::build_visualization_insights;
use crate::config::EngineConfig;

static DEFAULT_ENGINE: LazyLock<SentimentEngine> = LazyLock::new(SentimentEngine::new);

/// Main engine that orchestrates all analysis components
#[derive(Debug, Clone)]
pub struct SentimentEngine {
    scorer: SentimentScorer,
    clarity: ClarityExtractor,
    behavioral: BehavioralExtractor,
    config: EngineConfig,
}

impl Default for SentimentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentEngine {
    /// Create an engine with default lexicons and thresholds
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom thresholds
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_components(
            config,
            SentimentLexicon::default(),
            Arc::new(RegexLexicalAnalyzer::new()),
        )
    }

    /// Create an engine with substitute lexical resources
    pub fn with_components(
        config: EngineConfig,
        lexicon: SentimentLexicon,
        analyzer: Arc<dyn LexicalAnalyzer>,
    ) -> Self {
        Self {
            scorer: SentimentScorer::with_lexicon(lexicon),
            clarity: ClarityExtractor::with_config(analyzer, config.clarity),
            behavioral: BehavioralExtractor::with_thresholds(config.behavioral),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Merge per-call overrides; out-of-range overrides fall back to the configured options.
    fn tone_shift_options(&self, options: &AnalyzeOptions) -> ToneShiftOptions {
        let merged = self.config.tone_shift.merged(&options.tone_shift);
        match merged.validate() {
            Ok(()) => merged,
            Err(e) => {
                warn!(error = %e, "ignoring invalid tone-shift overrides");
                self.config.tone_shift
            }
        }
    }

    /// Run the full pipeline
    pub fn analyze(&self, input: &EngineInput, options: &AnalyzeOptions) -> SentimentEngineResult {
        let start = Instant::now();

        // 1. Segment
        let segmented = segment(&input.text, input.segments.as_deref());
        let segments = segmented.segments;

        // 2. Score and aggregate
        let sentiment_by_segment = self.scorer.score_segments(&segments);
        let overall = aggregate(&sentiment_by_segment);

        // 3. Tone shifts (per-call overrides on top of configured options)
        let tone_options = self.tone_shift_options(options);
        let tone_shifts = detect_tone_shifts(&sentiment_by_segment, &tone_options);

        // 4. Clarity
        let clarity_indicators = self.clarity.extract(&segments);
        let clarity_score = compute_clarity_score(&clarity_indicators);

        // 5. Trend and behavior
        let emotional_trend_analysis = analyze_emotional_trend(&sentiment_by_segment);
        let behavioral_signals = self.behavioral.extract(&segments);

        // 6. Presentation
        let visualization =
            build_visualization_insights(&sentiment_by_segment, &tone_shifts, &clarity_indicators);
        let insight_summaries = build_insight_summaries(&SummaryInput {
            emotional_trend_analysis: &emotional_trend_analysis,
            clarity_score: &clarity_score,
            behavioral_signals: &behavioral_signals,
            tone_shifts: &tone_shifts,
            segment_count: segments.len(),
        });

        debug!(
            segment_count = segments.len(),
            raw_length = segmented.raw_length,
            tone_shifts = tone_shifts.len(),
            clarity_score = clarity_score.score,
            elapsed_us = start.elapsed().as_micros() as u64,
            "analysis complete"
        );

        SentimentEngineResult {
            sentiment_score: overall.overall_score,
            sentiment_by_segment,
            tone_shifts,
            clarity_indicators,
            visualization,
            emotional_trend_analysis,
            clarity_score,
            behavioral_signals,
            insight_summaries,
            segment_count: segments.len(),
        }
    }

    /// Analyze plain text with default options
    pub fn analyze_text(&self, text: &str) -> SentimentEngineResult {
        self.analyze(&EngineInput::text(text), &AnalyzeOptions::default())
    }

    /// Derive trend, clarity score, behavioral signals and summaries from
    /// sentiment computed elsewhere. Without segment texts the behavioral
    /// signals are the empty default.
    pub fn process_sentiment_results(
        &self,
        prior: &ExternalSentiment,
        segments: Option<&[String]>,
    ) -> ProcessedAnalytics {
        let segments = segments.unwrap_or_default();

        let emotional_trend_analysis = analyze_emotional_trend(&prior.sentiment_by_segment);
        let clarity_score = compute_clarity_score(&prior.clarity_indicators);
        let behavioral_signals = self.behavioral.extract(segments);
        let insight_summaries = build_insight_summaries(&SummaryInput {
            emotional_trend_analysis: &emotional_trend_analysis,
            clarity_score: &clarity_score,
            behavioral_signals: &behavioral_signals,
            tone_shifts: &prior.tone_shifts,
            segment_count: prior.sentiment_by_segment.len(),
        });

        debug!(
            segment_count = prior.sentiment_by_segment.len(),
            summaries = insight_summaries.len(),
            "processed external sentiment"
        );

        ProcessedAnalytics {
            emotional_trend_analysis,
            clarity_score,
            behavioral_signals,
            insight_summaries,
        }
    }

    /// Analyze text and project the result into the reduced report shape
    pub fn report(&self, text: &str) -> AnalysisReport {
        let result = self.analyze_text(text);
        AnalysisReport::from_result(&result, &self.config.model_version)
    }
}

/// Run the full pipeline with the default engine
pub fn analyze(input: &EngineInput, options: &AnalyzeOptions) -> SentimentEngineResult {
    DEFAULT_ENGINE.analyze(input, options)
}

/// Analyze plain text with the default engine
pub fn analyze_text(text: &str) -> SentimentEngineResult {
    DEFAULT_ENGINE.analyze_text(text)
}

/// Post-process external sentiment with the default engine
pub fn process_sentiment_results(
    prior: &ExternalSentiment,
    segments: Option<&[String]>,
) -> ProcessedAnalytics {
    DEFAULT_ENGINE.process_sentiment_results(prior, segments)
}
