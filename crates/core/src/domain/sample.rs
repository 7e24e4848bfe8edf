// CPU Sample - one utilization reading, discarded after the response

use super::error::{DomainError, Result};
use serde::Serialize;

/// A single point-in-time CPU utilization reading (0.0 - 100.0, not enforced)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CpuSample {
    pub usage_percent: f64,
}

impl CpuSample {
    pub fn new(usage_percent: f64) -> Result<Self> {
        if !usage_percent.is_finite() {
            return Err(DomainError::NonFiniteReading(usage_percent));
        }
        Ok(Self { usage_percent })
    }

    /// Parse a reading scraped from a utility's text output.
    ///
    /// Surrounding whitespace is ignored. Empty, non-numeric and non-finite
    /// readings are rejected.
    pub fn parse_reading(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| DomainError::InvalidReading(trimmed.to_string()))?;
        Self::new(value)
    }

    /// Strictly greater than the threshold
    pub fn exceeds(&self, threshold_percent: f64) -> bool {
        self.usage_percent > threshold_percent
    }
}
