#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{MiningError, Result};

/// Thresholds for one mining run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MiningConfig {
    pub min_support: f64,
    pub min_confidence: f64,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.2,
            min_confidence: 0.5,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> Self {
        Self {
            min_support,
            min_confidence,
        }
    }

    /// Low thresholds used when looking for products to suggest.
    pub fn for_recommendations() -> Self {
        Self::new(0.05, 0.2)
    }

    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_ratio("min_support", self.min_support)?;
        check_ratio("min_confidence", self.min_confidence)
    }
}

pub(crate) fn check_ratio(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(MiningError::InvalidThreshold { name, value })
    }
}
