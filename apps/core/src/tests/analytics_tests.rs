//! Analytics Component Tests
//!
//! Contract checks across segmentation, scoring, clarity, trend and
//! visualization, exercised through the public re-exports.

use crate::analytics::{
    aggregate, analyze_emotional_trend, build_visualization_insights, compute_clarity_score,
    detect_tone_shifts, generate_clarity_indicators, score_segment, score_segments, segment,
    AmbiguityFlag, ClarityGrade, ClarityIndicators, LexicalAnalyzer, SentimentEngine,
    SentimentLabel, SentimentLexicon, ToneShiftOptions,
};
use crate::config::EngineConfig;
use std::sync::Arc;

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "word",
    "I love this. Great work! Thanks.",
    "This is bad. Terrible. I hate it.",
    "good bad good bad good",
    "no no no no no no no",
    "The quarterly numbers are in; we might need to circle back.",
    "Amazing wonderful excellent best happy glad hope yes love great good thanks positive",
];

#[cfg(test)]
mod sentiment_contract_tests {
    use super::*;

    #[test]
    fn test_score_in_bounds_and_label_consistent() {
        for text in SAMPLES {
            let r = score_segment(text);
            assert!((-1.0..=1.0).contains(&r.score), "score out of range for '{}'", text);
            assert!((0.0..=1.0).contains(&r.confidence), "confidence out of range for '{}'", text);
            assert_eq!(r.label, SentimentLabel::from_score(r.score), "label mismatch for '{}'", text);
        }
    }

    #[test]
    fn test_ratios_sum_to_one() {
        for text in SAMPLES {
            let segments: Vec<&str> = text.split_whitespace().collect();
            if segments.is_empty() {
                continue;
            }
            let agg = aggregate(&score_segments(&segments));
            let sum = agg.positive_ratio + agg.negative_ratio + agg.neutral_ratio;
            assert!((sum - 1.0).abs() <= 0.02, "ratios sum to {} for '{}'", sum, text);
        }
    }

    #[test]
    fn test_scenario_good_bad_okay() {
        let result = score_segments(&["Good.", "Bad.", "Okay."]);
        let indexes: Vec<usize> = result.iter().map(|s| s.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }
}

#[cfg(test)]
mod clarity_contract_tests {
    use super::*;

    #[test]
    fn test_clarity_score_bounds() {
        for text in SAMPLES {
            let seg = segment(text, None);
            let ind = generate_clarity_indicators(&seg.segments);
            assert!((0.0..=10.0).contains(&ind.readability));
            assert!((0.0..=10.0).contains(&ind.complexity_score));
            assert!(ind.sentence_count >= 1);
            let score = compute_clarity_score(&ind);
            assert!(score.score <= 100);
            assert_eq!(score.grade, ClarityGrade::from_score(score.score));
        }
    }

    #[test]
    fn test_jargon_and_ambiguity_scenario() {
        let indicators = ClarityIndicators {
            readability: 6.0,
            avg_sentence_length: 18.0,
            complexity_score: 3.0,
            jargon_count: 5,
            ambiguity_flags: vec![
                AmbiguityFlag::HedgingLanguage,
                AmbiguityFlag::UncertaintyPhrases,
            ],
            sentence_count: 4,
            word_count: 72,
        };
        let score = compute_clarity_score(&indicators);
        assert!(score.score < 80);
        assert!(score.breakdown.jargon_penalty > 0.0);
        assert!(score.breakdown.ambiguity_penalty > 0.0);
    }

    struct ShoutingAnalyzer;

    impl LexicalAnalyzer for ShoutingAnalyzer {
        fn count_jargon(&self, text: &str) -> usize {
            text.split_whitespace()
                .filter(|w| w.len() > 1 && w.chars().all(|c| c.is_ascii_uppercase()))
                .count()
        }

        fn ambiguity_flags(&self, _text: &str) -> Vec<AmbiguityFlag> {
            Vec::new()
        }
    }

    #[test]
    fn test_substitute_lexical_analyzer() {
        let engine = SentimentEngine::with_components(
            EngineConfig::default(),
            SentimentLexicon::default(),
            Arc::new(ShoutingAnalyzer),
        );
        let result = engine.analyze_text("Maybe we SHIP the API today?");
        assert_eq!(result.clarity_indicators.jargon_count, 2);
        assert!(result.clarity_indicators.ambiguity_flags.is_empty());
    }
}

#[cfg(test)]
mod trend_and_shift_tests {
    use super::*;

    #[test]
    fn test_tone_shift_invariants() {
        let by_segment = score_segments(&[
            "great", "terrible", "okay", "love it", "hate it", "fine", "best day",
        ]);
        for window_size in 1..=4 {
            let options = ToneShiftOptions {
                min_magnitude: 0.3,
                window_size,
            };
            for shift in detect_tone_shifts(&by_segment, &options) {
                assert!(shift.from_index < shift.to_index);
                assert!(shift.magnitude >= 0.3);
                assert!(shift.to_index < by_segment.len());
            }
        }
    }

    #[test]
    fn test_trend_bounds() {
        let by_segment = score_segments(&["bad", "sad", "okay", "good", "great", "best"]);
        let trend = analyze_emotional_trend(&by_segment);
        assert!((0.0..=1.0).contains(&trend.strength));
        assert!((0.0..=1.0).contains(&trend.volatility));
        assert!(trend.slope > 0.0);
        assert_eq!(trend.longest_negative_run, 2);
        assert_eq!(trend.longest_positive_run, 3);
    }

    #[test]
    fn test_visualization_aggregate_is_the_same_function() {
        let by_segment = score_segments(&["great", "bad", "meh", "love"]);
        let shifts = detect_tone_shifts(&by_segment, &ToneShiftOptions::default());
        let ind = generate_clarity_indicators(&["great", "bad", "meh", "love"]);
        let viz = build_visualization_insights(&by_segment, &shifts, &ind);
        assert_eq!(viz.aggregate_summary, aggregate(&by_segment));
        assert_eq!(viz.tone_shifts, shifts);
        assert_eq!(viz.time_series_data.len(), 4);
    }
}
