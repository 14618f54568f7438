//! ReflectAI core: rule-based text analytics.
//!
//! Converts conversational text into sentiment, clarity, emotional-trend,
//! behavioral and tone-shift metrics, human-readable summaries and
//! chart-ready payloads. No I/O, no shared state; see [`analytics`].

pub mod analytics;
pub mod config;
pub mod error;
pub mod privacy;

pub use analytics::{analyze, analyze_text, process_sentiment_results, SentimentEngine};
pub use config::EngineConfig;
pub use error::AppError;

#[cfg(test)]
mod tests;
