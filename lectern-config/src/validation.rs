//! Guard-rail validation for loaded configuration.
//!
//! Hard failures stop startup; warnings flag values that are legal but
//! probably not what the operator meant.

use thiserror::Error;
use url::Url;

use crate::models::Config;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error(
        "completion_threshold must be within (0, 1], got {0}"
    )]
    CompletionThresholdOutOfRange(f32),

    #[error("skip_tolerance_secs must be non-negative, got {0}")]
    NegativeSkipTolerance(f64),

    #[error("min_segment_secs must be non-negative, got {0}")]
    NegativeMinSegment(f64),

    #[error("api.base_url is not a valid URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// A single non-fatal configuration warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub field: &'static str,
    pub message: String,
}

/// Warnings accumulated during validation.
#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings(pub Vec<ConfigWarning>);

impl ConfigWarnings {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(ConfigWarning {
            field,
            message: message.into(),
        });
    }

    /// Emit every warning through tracing at warn level.
    pub fn log(&self) {
        for warning in &self.0 {
            tracing::warn!(field = warning.field, "{}", warning.message);
        }
    }
}

impl Config {
    /// Validate guard rails, returning non-fatal warnings on success.
    pub fn validate(&self) -> Result<ConfigWarnings, ConfigGuardRailError> {
        let tracker = &self.tracker;
        if !(tracker.completion_threshold > 0.0
            && tracker.completion_threshold <= 1.0)
        {
            return Err(ConfigGuardRailError::CompletionThresholdOutOfRange(
                tracker.completion_threshold,
            ));
        }
        if tracker.skip_tolerance_secs < 0.0 {
            return Err(ConfigGuardRailError::NegativeSkipTolerance(
                tracker.skip_tolerance_secs,
            ));
        }
        if tracker.min_segment_secs < 0.0 {
            return Err(ConfigGuardRailError::NegativeMinSegment(
                tracker.min_segment_secs,
            ));
        }
        Url::parse(&self.api.base_url)?;

        let mut warnings = ConfigWarnings::default();
        if tracker.skip_tolerance_secs > 60.0 {
            warnings.push(
                "tracker.skip_tolerance_secs",
                format!(
                    "tolerance of {}s makes skipping ahead meaningful",
                    tracker.skip_tolerance_secs
                ),
            );
        }
        if tracker.min_segment_secs == 0.0 {
            warnings.push(
                "tracker.min_segment_secs",
                "zero-length segments will be counted as watch time",
            );
        }
        if tracker.completion_threshold < 0.5 {
            warnings.push(
                "tracker.completion_threshold",
                format!(
                    "threshold {} marks lectures complete when barely started",
                    tracker.completion_threshold
                ),
            );
        }
        Ok(warnings)
    }
}
