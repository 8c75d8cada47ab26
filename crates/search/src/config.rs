use gradte_core::{SequenceMode, SequenceParameters};
use thiserror::Error;

use crate::{Bounds, Error};

/// Target b-value (s/mm²) used when none is configured.
pub const DEFAULT_TARGET_BVALUE: f64 = 1000.0;

/// Errors that can occur when building a search [`Config`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("target b-value must be finite and non-negative, got {0}")]
    TargetBValue(f64),
}

/// Configuration for the minimal echo time search.
///
/// Unset bounds fall back to mode-dependent defaults when resolved against a
/// parameter record: `[T_readout + T_90 + T_180 + 10, 200]` ms for diffusion
/// modes and `[0.1, 5.0]` ms for free mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    min_te: Option<f64>,
    max_te: Option<f64>,
    target_bvalue: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_te: None,
            max_te: None,
            target_bvalue: DEFAULT_TARGET_BVALUE,
        }
    }
}

impl Config {
    /// Sets an explicit lower echo time bound (ms).
    #[must_use]
    pub fn with_min_te(mut self, min_te: f64) -> Self {
        self.min_te = Some(min_te);
        self
    }

    /// Sets an explicit upper echo time bound (ms).
    #[must_use]
    pub fn with_max_te(mut self, max_te: f64) -> Self {
        self.max_te = Some(max_te);
        self
    }

    /// Sets the diffusion target b-value (s/mm²).
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is negative or non-finite.
    pub fn with_target_bvalue(mut self, target: f64) -> Result<Self, ConfigError> {
        if !target.is_finite() || target < 0.0 {
            return Err(ConfigError::TargetBValue(target));
        }
        self.target_bvalue = target;
        Ok(self)
    }

    #[must_use]
    pub fn min_te(&self) -> Option<f64> {
        self.min_te
    }

    #[must_use]
    pub fn max_te(&self) -> Option<f64> {
        self.max_te
    }

    #[must_use]
    pub fn target_bvalue(&self) -> f64 {
        self.target_bvalue
    }

    /// Resolves the search range for a parameter record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`] if the record lacks required
    /// timing fields, or [`Error::InvalidBounds`] if the range is empty,
    /// non-finite, or does not clear the readout and pulse time.
    pub fn bounds(&self, params: &SequenceParameters) -> Result<Bounds, Error> {
        let floor = params.te_floor()?;
        let (default_min, default_max) = match params.mode()? {
            SequenceMode::Diffusion => (floor + 10.0, 200.0),
            SequenceMode::Free => (0.1, 5.0),
        };

        let bounds = Bounds::new(
            self.min_te.unwrap_or(default_min),
            self.max_te.unwrap_or(default_max),
        )?;
        Ok(bounds.above(floor)?)
    }
}
