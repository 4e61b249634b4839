use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Share of the catalog that must be solved before the level counts as complete.
pub const DEFAULT_COMPLETION_RATIO: f64 = 0.75;

/// How long the "case solved" screen stays up before completion is reported.
pub const DEFAULT_COMPLETION_DELAY_MS: u64 = 2000;

/// Level-wide policy values, read from the `level` section of a catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    #[serde(alias = "completionRatio")]
    pub completion_ratio: f64,
    #[serde(alias = "completionDelayMs")]
    pub completion_delay_ms: u64,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            completion_ratio: DEFAULT_COMPLETION_RATIO,
            completion_delay_ms: DEFAULT_COMPLETION_DELAY_MS,
        }
    }
}

impl LevelConfig {
    pub fn with_completion_ratio(mut self, ratio: f64) -> Self {
        self.completion_ratio = ratio;
        self
    }

    pub fn with_completion_delay(mut self, delay: Duration) -> Self {
        self.completion_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    /// Rejects ratios outside `(0, 1]`, including NaN.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let ratio = self.completion_ratio;
        if ratio > 0.0 && ratio <= 1.0 {
            Ok(())
        } else {
            Err(CatalogError::InvalidCompletionRatio(ratio))
        }
    }
}
