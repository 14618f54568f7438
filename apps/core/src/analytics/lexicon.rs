//! Lexical resources: sentiment word lists and pattern-based text checks.
//!
//! The sentiment lexicon is injected into the scorer, and the jargon/ambiguity
//! checks sit behind [`LexicalAnalyzer`] so a smarter analyzer can replace the
//! regex heuristics without touching scoring or aggregation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

/// Default positive affect words
const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "happy", "love", "thanks", "amazing", "wonderful", "excellent", "positive",
    "yes", "glad", "hope", "best",
];

/// Default negative affect words
const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "hate", "sad", "angry", "frustrated", "awful", "poor", "negative", "no",
    "sorry", "worst", "fail",
];

/// Flags raised when text is likely to be misunderstood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityFlag {
    /// Hedging words (maybe, perhaps, might...)
    HedgingLanguage,
    /// Uncertainty phrases (it depends, unclear, not sure)
    UncertaintyPhrases,
    /// A line ends with a question mark
    QuestionEnding,
    /// Average sentence is very long
    LongSentences,
    /// At least one segment is very long
    LongMessages,
}

impl AmbiguityFlag {
    pub fn label(&self) -> &'static str {
        match self {
            AmbiguityFlag::HedgingLanguage => "hedging_language",
            AmbiguityFlag::UncertaintyPhrases => "uncertainty_phrases",
            AmbiguityFlag::QuestionEnding => "question_ending",
            AmbiguityFlag::LongSentences => "long_sentences",
            AmbiguityFlag::LongMessages => "long_messages",
        }
    }
}

impl fmt::Display for AmbiguityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Immutable positive/negative word sets used by the sentiment scorer.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new(POSITIVE_WORDS, NEGATIVE_WORDS)
    }
}

impl SentimentLexicon {
    /// Build a lexicon from word lists. Words are matched lower-case.
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            positive: positive
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            negative: negative
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }
}

/// Split text into lower-case word tokens for lexicon matching.
///
/// Surrounding punctuation is stripped (`"great!"` -> `"great"`) and
/// single-character tokens are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| word.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Pattern-driven checks over a block of text.
pub trait LexicalAnalyzer: Send + Sync {
    /// Number of jargon occurrences, repeats included.
    fn count_jargon(&self, text: &str) -> usize;

    /// Flags detectable from the wording alone, in a stable order, without duplicates.
    fn ambiguity_flags(&self, text: &str) -> Vec<AmbiguityFlag>;
}

// Compile patterns once at startup
// NOTE: expect() is acceptable here, all patterns are literals.
static JARGON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(synergy|leverage|bandwidth|circle back|move the needle|low-hanging fruit|touch base|reach out|pivot|disrupt)\b",
    )
    .expect("Invalid regex: jargon terms")
});

static HEDGING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(maybe|perhaps|might|could|possibly)\b")
        .expect("Invalid regex: hedging words")
});

static UNCERTAINTY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(it depends|unclear|not sure)\b").expect("Invalid regex: uncertainty phrases")
});

static QUESTION_ENDING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\?\s*$").expect("Invalid regex: question ending"));

/// Default [`LexicalAnalyzer`] backed by English regex heuristics.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexLexicalAnalyzer;

impl RegexLexicalAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl LexicalAnalyzer for RegexLexicalAnalyzer {
    fn count_jargon(&self, text: &str) -> usize {
        JARGON_PATTERN.find_iter(text).count()
    }

    fn ambiguity_flags(&self, text: &str) -> Vec<AmbiguityFlag> {
        let mut flags = Vec::new();
        if HEDGING_PATTERN.is_match(text) {
            flags.push(AmbiguityFlag::HedgingLanguage);
        }
        if UNCERTAINTY_PATTERN.is_match(text) {
            flags.push(AmbiguityFlag::UncertaintyPhrases);
        }
        if QUESTION_ENDING_PATTERN.is_match(text) {
            flags.push(AmbiguityFlag::QuestionEnding);
        }
        flags
    }
}
