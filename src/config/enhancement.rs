//! Comparison enhancement configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_TIMEOUT_SECS: u64 = 120;

/// Optional narrative enhancement of comparisons
#[derive(Debug, Clone, Deserialize)]
pub struct EnhancementConfig {
    /// Run the enhancer after each comparison
    #[serde(default)]
    pub enabled: bool,

    /// Time allowed per enhancer call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl EnhancementConfig {
    /// Enhancer timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate enhancement configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout(self.timeout_secs));
        }
        Ok(())
    }
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}
