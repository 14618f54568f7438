//! Engine configuration.
//!
//! Defaults reproduce the hand-tuned heuristics. Values can be overridden
//! through environment variables (optionally from a `.env` file) and are
//! validated before use.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;
use validator::Validate;

use crate::analytics::behavioral::BehavioralThresholds;
use crate::analytics::clarity::ClarityThresholds;
use crate::analytics::tone_shift::ToneShiftOptions;
use crate::error::AppError;

pub const DEFAULT_MODEL_VERSION: &str = "1.0.0";

pub const ENV_MIN_MAGNITUDE: &str = "REFLECT_TONE_SHIFT_MIN_MAGNITUDE";
pub const ENV_WINDOW_SIZE: &str = "REFLECT_TONE_SHIFT_WINDOW_SIZE";
pub const ENV_MODEL_VERSION: &str = "REFLECT_MODEL_VERSION";
pub const ENV_SHORT_SEGMENT_CHARS: &str = "REFLECT_SHORT_SEGMENT_CHARS";
pub const ENV_LONG_SEGMENT_CHARS: &str = "REFLECT_LONG_SEGMENT_CHARS";
pub const ENV_LONG_MESSAGE_CHARS: &str = "REFLECT_LONG_MESSAGE_CHARS";

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    #[validate(nested)]
    pub tone_shift: ToneShiftOptions,
    #[validate(nested)]
    pub clarity: ClarityThresholds,
    #[validate(nested)]
    pub behavioral: BehavioralThresholds,
    /// Version tag stamped on reduced reports
    #[validate(length(min = 1))]
    pub model_version: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tone_shift: ToneShiftOptions::default(),
            clarity: ClarityThresholds::default(),
            behavioral: BehavioralThresholds::default(),
            model_version: DEFAULT_MODEL_VERSION.to_string(),
        }
    }
}

/// Parse an optional environment variable, keeping `current` when unset.
fn env_or<T>(key: &str, current: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} has invalid value '{}': {}", key, raw, e))),
        Err(env::VarError::NotPresent) => Ok(current),
        Err(e) => Err(AppError::Config(format!("{}: {}", key, e))),
    }
}

impl EngineConfig {
    /// Load configuration from the environment, reading `.env` if present.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_current_env()
    }

    /// Load configuration from the process environment only.
    pub fn from_current_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        config.tone_shift.min_magnitude = env_or(ENV_MIN_MAGNITUDE, config.tone_shift.min_magnitude)?;
        config.tone_shift.window_size = env_or(ENV_WINDOW_SIZE, config.tone_shift.window_size)?;
        config.model_version = env_or(ENV_MODEL_VERSION, config.model_version)?;
        config.behavioral.short_segment_chars =
            env_or(ENV_SHORT_SEGMENT_CHARS, config.behavioral.short_segment_chars)?;
        config.behavioral.long_segment_chars =
            env_or(ENV_LONG_SEGMENT_CHARS, config.behavioral.long_segment_chars)?;
        config.clarity.long_message_chars =
            env_or(ENV_LONG_MESSAGE_CHARS, config.clarity.long_message_chars)?;

        config.validate()?;
        debug!(
            min_magnitude = config.tone_shift.min_magnitude,
            window_size = config.tone_shift.window_size,
            model_version = %config.model_version,
            "engine configuration loaded"
        );
        Ok(config)
    }
}
