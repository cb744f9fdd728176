//! Detector configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SandhiError};

mod defaults;

/// Junction detector configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Minimum clearance radius from any obstacle, in cells. Candidates
    /// closer than this to an obstacle are rejected outright, and the radial
    /// search starts at this radius. Must be at least 1.
    #[serde(default = "defaults::threshold")]
    pub threshold: u32,

    /// Minimum separation between basis points, as a multiple of the
    /// threshold. An obstacle cell within `separation_factor * threshold`
    /// of an already-recorded basis point counts as the same obstacle
    /// cluster and is discarded.
    #[serde(default = "defaults::separation_factor")]
    pub separation_factor: f32,

    /// Partition the cell scan across worker threads (rayon).
    #[serde(default = "defaults::enabled")]
    pub parallel: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::threshold(),
            separation_factor: defaults::separation_factor(),
            parallel: defaults::enabled(),
        }
    }
}

impl DetectorConfig {
    /// Create a configuration with the given threshold and defaults for the
    /// remaining fields.
    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Builder-style setter for the separation factor.
    pub fn with_separation_factor(mut self, factor: f32) -> Self {
        self.separation_factor = factor;
        self
    }

    /// Builder-style setter for the parallel flag.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate the configuration before any scan begins.
    pub fn validate(&self) -> Result<()> {
        if self.threshold < 1 {
            return Err(SandhiError::InvalidThreshold(self.threshold));
        }
        if !self.separation_factor.is_finite() || self.separation_factor <= 0.0 {
            return Err(SandhiError::InvalidSeparation(self.separation_factor));
        }
        Ok(())
    }

    /// Minimum distance between basis points, in cells.
    #[inline]
    pub fn min_separation(&self) -> f32 {
        self.separation_factor * self.threshold as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DetectorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.threshold, 8);
        assert!((config.min_separation() - 14.4).abs() < 1e-5);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let config = DetectorConfig::with_threshold(0);
        assert!(matches!(
            config.validate(),
            Err(SandhiError::InvalidThreshold(0))
        ));
    }

    #[test]
    fn test_bad_separation_rejected() {
        let config = DetectorConfig::with_threshold(4).with_separation_factor(0.0);
        assert!(config.validate().is_err());
        let config = DetectorConfig::with_threshold(4).with_separation_factor(f32::NAN);
        assert!(config.validate().is_err());
    }
}
