//! Clarity analysis.
//!
//! Readability, sentence/word counts, complexity, jargon and ambiguity are
//! extracted from the joined segment text, then folded into a single 0-100
//! score with a letter grade.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, LazyLock};
use validator::Validate;

use super::lexicon::{AmbiguityFlag, LexicalAnalyzer, RegexLexicalAnalyzer};
use super::numeric::round_to;

// NOTE: expect() is acceptable here, the pattern is a literal.
static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid regex: sentence terminators"));

static DEFAULT_EXTRACTOR: LazyLock<ClarityExtractor> = LazyLock::new(ClarityExtractor::new);

/// Readability reported when there is no sentence to measure.
const NEUTRAL_READABILITY: f64 = 5.0;

/// Tunable cut-offs for the clarity heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ClarityThresholds {
    /// Average words per sentence that adds complexity
    #[validate(range(min = 1.0))]
    pub long_sentence_words: f64,
    /// Average words per sentence that adds more complexity
    #[validate(range(min = 1.0))]
    pub very_long_sentence_words: f64,
    /// Jargon-to-word ratio that adds complexity
    #[validate(range(min = 0.0, max = 1.0))]
    pub jargon_ratio: f64,
    /// Jargon-to-word ratio that adds more complexity
    #[validate(range(min = 0.0, max = 1.0))]
    pub heavy_jargon_ratio: f64,
    /// Average words per sentence that raises `long_sentences`
    #[validate(range(min = 1.0))]
    pub ambiguous_sentence_words: f64,
    /// Segment length (chars) that raises `long_messages`
    #[validate(range(min = 1))]
    pub long_message_chars: usize,
}

impl Default for ClarityThresholds {
    fn default() -> Self {
        Self {
            long_sentence_words: 20.0,
            very_long_sentence_words: 30.0,
            jargon_ratio: 0.02,
            heavy_jargon_ratio: 0.05,
            ambiguous_sentence_words: 25.0,
            long_message_chars: 500,
        }
    }
}

/// Raw clarity measurements over the whole text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClarityIndicators {
    /// 0-10, higher is easier to read
    pub readability: f64,
    pub avg_sentence_length: f64,
    /// 0-10, higher is more complex
    pub complexity_score: f64,
    pub jargon_count: usize,
    pub ambiguity_flags: Vec<AmbiguityFlag>,
    pub sentence_count: usize,
    pub word_count: usize,
}

/// Letter grade for a clarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClarityGrade {
    A,
    B,
    C,
    D,
    F,
}

impl ClarityGrade {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => ClarityGrade::A,
            80..=89 => ClarityGrade::B,
            70..=79 => ClarityGrade::C,
            60..=69 => ClarityGrade::D,
            _ => ClarityGrade::F,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClarityGrade::A => "A",
            ClarityGrade::B => "B",
            ClarityGrade::C => "C",
            ClarityGrade::D => "D",
            ClarityGrade::F => "F",
        }
    }
}

impl fmt::Display for ClarityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Contributions behind a clarity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClarityBreakdown {
    pub readability: f64,
    pub complexity: f64,
    pub jargon_penalty: f64,
    pub ambiguity_penalty: f64,
}

/// Single 0-100 clarity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarityScore {
    pub score: u32,
    pub grade: ClarityGrade,
    pub breakdown: ClarityBreakdown,
}

/// Extracts [`ClarityIndicators`] from segment texts
#[derive(Clone)]
pub struct ClarityExtractor {
    analyzer: Arc<dyn LexicalAnalyzer>,
    thresholds: ClarityThresholds,
}

impl Default for ClarityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClarityExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClarityExtractor")
            .field("thresholds", &self.thresholds)
            .finish_non_exhaustive()
    }
}

impl ClarityExtractor {
    /// Create an extractor with the regex analyzer and default thresholds
    pub fn new() -> Self {
        Self::with_config(Arc::new(RegexLexicalAnalyzer::new()), ClarityThresholds::default())
    }

    /// Create an extractor with a custom analyzer and thresholds
    pub fn with_config(analyzer: Arc<dyn LexicalAnalyzer>, thresholds: ClarityThresholds) -> Self {
        Self {
            analyzer,
            thresholds,
        }
    }

    pub fn thresholds(&self) -> &ClarityThresholds {
        &self.thresholds
    }

    /// Count sentence-terminator runs; 1 for unterminated text, 0 for empty text
    fn count_sentences(text: &str) -> usize {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return 0;
        }
        SENTENCE_TERMINATORS.find_iter(trimmed).count().max(1)
    }

    /// Piecewise readability over average words per sentence
    fn readability(words: usize, sentences: usize) -> f64 {
        if sentences == 0 {
            return NEUTRAL_READABILITY;
        }
        let avg = words as f64 / sentences as f64;
        if avg <= 10.0 {
            10.0
        } else if avg <= 15.0 {
            8.0
        } else if avg <= 20.0 {
            6.0
        } else {
            (6.0 - (avg - 20.0) / 5.0).max(1.0)
        }
    }

    fn complexity(&self, avg_sentence_length: f64, jargon_count: usize, word_count: usize) -> f64 {
        let t = &self.thresholds;
        let mut score = 0.0;
        if avg_sentence_length > t.long_sentence_words {
            score += 3.0;
        }
        if avg_sentence_length > t.very_long_sentence_words {
            score += 2.0;
        }
        let jargon_ratio = if word_count > 0 {
            jargon_count as f64 / word_count as f64
        } else {
            0.0
        };
        if jargon_ratio > t.jargon_ratio {
            score += 3.0;
        }
        if jargon_ratio > t.heavy_jargon_ratio {
            score += 2.0;
        }
        f64::min(10.0, score)
    }

    /// Extract indicators from the segments joined by single spaces
    pub fn extract<S: AsRef<str>>(&self, segments: &[S]) -> ClarityIndicators {
        let full_text = segments
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(" ");

        let word_count = full_text.split_whitespace().count();
        let raw_sentences = Self::count_sentences(&full_text);
        let sentence_count = raw_sentences.max(1);
        let words_per_sentence = word_count as f64 / sentence_count as f64;

        let avg_sentence_length = round_to(words_per_sentence, 1);
        let readability = round_to(Self::readability(word_count, raw_sentences), 1);
        let jargon_count = self.analyzer.count_jargon(&full_text);
        let complexity_score =
            round_to(self.complexity(avg_sentence_length, jargon_count, word_count), 1);

        let mut ambiguity_flags = self.analyzer.ambiguity_flags(&full_text);
        if words_per_sentence > self.thresholds.ambiguous_sentence_words {
            ambiguity_flags.push(AmbiguityFlag::LongSentences);
        }
        if segments
            .iter()
            .any(|s| s.as_ref().chars().count() > self.thresholds.long_message_chars)
        {
            ambiguity_flags.push(AmbiguityFlag::LongMessages);
        }
        dedup_in_order(&mut ambiguity_flags);

        ClarityIndicators {
            readability,
            avg_sentence_length,
            complexity_score,
            jargon_count,
            ambiguity_flags,
            sentence_count,
            word_count,
        }
    }
}

fn dedup_in_order(flags: &mut Vec<AmbiguityFlag>) {
    let mut seen = Vec::with_capacity(flags.len());
    flags.retain(|flag| {
        if seen.contains(flag) {
            false
        } else {
            seen.push(*flag);
            true
        }
    });
}

/// Extract clarity indicators with the default analyzer and thresholds
pub fn generate_clarity_indicators<S: AsRef<str>>(segments: &[S]) -> ClarityIndicators {
    DEFAULT_EXTRACTOR.extract(segments)
}

/// Fold indicators into a 0-100 score and grade
pub fn compute_clarity_score(indicators: &ClarityIndicators) -> ClarityScore {
    let readability = indicators.readability.clamp(0.0, 10.0);
    let complexity = indicators.complexity_score.clamp(0.0, 10.0);
    let jargon_penalty = f64::min(10.0, indicators.jargon_count as f64 * 2.0);
    let ambiguity_penalty = f64::min(10.0, indicators.ambiguity_flags.len() as f64 * 2.0);

    let raw = readability * 4.0 + (10.0 - complexity) * 3.0 - jargon_penalty - ambiguity_penalty;
    let score = round_to((raw * 2.5).clamp(0.0, 100.0), 0) as u32;

    ClarityScore {
        score,
        grade: ClarityGrade::from_score(score),
        breakdown: ClarityBreakdown {
            readability: round_to(readability, 1),
            complexity: round_to(complexity, 1),
            jargon_penalty: round_to(jargon_penalty, 1),
            ambiguity_penalty: round_to(ambiguity_penalty, 1),
        },
    }
}
