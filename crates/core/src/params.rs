use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{SampleInterval, TimingError};

/// Errors raised when a [`SequenceParameters`] record is incomplete or invalid.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unknown sequence mode `{0}`")]
    UnknownMode(String),

    #[error("`{field}` must be finite and strictly positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("invalid timing: {0}")]
    Timing(#[from] TimingError),
}

/// Errors raised when loading parameters from a configuration document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid JSON parameters")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML parameters")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML parameters")]
    Yaml(#[from] serde_yaml::Error),
}

/// How a sequence is searched and evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceMode {
    /// Any `diff*` mode: a diffusion encoding split by a refocusing pulse.
    Diffusion,
    /// Unconstrained waveform; only hardware feasibility matters.
    Free,
}

/// The parameter record passed to a [`GradientOptimizer`].
///
/// Times are in milliseconds except `dt`, which is in seconds. Fields the
/// search does not interpret are kept in [`solver`](Self::solver) and passed
/// to the optimizer unchanged.
///
/// [`GradientOptimizer`]: crate::GradientOptimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceParameters {
    pub mode: String,

    #[serde(rename = "T_readout", default, skip_serializing_if = "Option::is_none")]
    pub t_readout: Option<f64>,

    #[serde(rename = "T_90", default, skip_serializing_if = "Option::is_none")]
    pub t_90: Option<f64>,

    #[serde(rename = "T_180", default, skip_serializing_if = "Option::is_none")]
    pub t_180: Option<f64>,

    #[serde(rename = "TE", default, skip_serializing_if = "Option::is_none")]
    pub te: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt: Option<f64>,

    #[serde(rename = "N0", default, skip_serializing_if = "Option::is_none")]
    pub n0: Option<f64>,

    #[serde(flatten)]
    pub solver: BTreeMap<String, serde_json::Value>,
}

impl SequenceParameters {
    /// Creates a diffusion-mode record with the given pulse timings.
    #[must_use]
    pub fn diffusion(mode: impl Into<String>, t_readout: f64, t_90: f64, t_180: f64) -> Self {
        Self {
            mode: mode.into(),
            t_readout: Some(t_readout),
            t_90: Some(t_90),
            t_180: Some(t_180),
            ..Self::bare("")
        }
    }

    /// Creates a free-mode record.
    #[must_use]
    pub fn free() -> Self {
        Self::bare("free")
    }

    fn bare(mode: &str) -> Self {
        Self {
            mode: mode.to_owned(),
            t_readout: None,
            t_90: None,
            t_180: None,
            te: None,
            dt: None,
            n0: None,
            solver: BTreeMap::new(),
        }
    }

    /// Loads parameters from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] if the document does not parse.
    pub fn from_json_str(source: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads parameters from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Toml`] if the document does not parse.
    pub fn from_toml_str(source: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(source)?)
    }

    /// Loads parameters from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Yaml`] if the document does not parse.
    pub fn from_yaml_str(source: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Sets the sample interval in seconds.
    #[must_use]
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Sets the number of samples per millisecond.
    #[must_use]
    pub fn with_n0(mut self, n0: f64) -> Self {
        self.n0 = Some(n0);
        self
    }

    /// Adds an optimizer-specific field.
    #[must_use]
    pub fn with_solver_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.solver.insert(key.into(), value);
        self
    }

    /// Returns a copy of these parameters carrying the given echo time.
    ///
    /// The receiver is left untouched, so one base record can seed any
    /// number of trials.
    #[must_use]
    pub fn with_te(&self, te: f64) -> Self {
        Self {
            te: Some(te),
            ..self.clone()
        }
    }

    /// Parses the mode string.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::UnknownMode`] unless the mode is `free` or
    /// starts with `diff`.
    pub fn mode(&self) -> Result<SequenceMode, ParamsError> {
        if self.mode.starts_with("diff") {
            Ok(SequenceMode::Diffusion)
        } else if self.mode == "free" {
            Ok(SequenceMode::Free)
        } else {
            Err(ParamsError::UnknownMode(self.mode.clone()))
        }
    }

    /// Returns the sample interval, taken from `dt` or derived as `1e-3 / N0`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither field is present or the value is not
    /// strictly positive.
    pub fn sample_interval(&self) -> Result<SampleInterval, ParamsError> {
        match (self.dt, self.n0) {
            (Some(dt), _) => SampleInterval::new(dt)
                .map_err(|_| ParamsError::NonPositive { field: "dt", value: dt }),
            (None, Some(n0)) => {
                if !n0.is_finite() || n0 <= 0.0 {
                    return Err(ParamsError::NonPositive { field: "N0", value: n0 });
                }
                Ok(SampleInterval::new(1.0e-3 / n0)?)
            }
            (None, None) => Err(ParamsError::MissingField("dt or N0")),
        }
    }

    /// Returns the readout duration in milliseconds.
    ///
    /// Free-mode records may omit it, in which case it is zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode is unknown, or if a diffusion record
    /// lacks `T_readout`.
    pub fn readout_time(&self) -> Result<f64, ParamsError> {
        match self.mode()? {
            SequenceMode::Diffusion => self.t_readout.ok_or(ParamsError::MissingField("T_readout")),
            SequenceMode::Free => Ok(self.t_readout.unwrap_or(0.0)),
        }
    }

    /// Returns the time every echo time must exceed, in milliseconds.
    ///
    /// This is `T_readout + T_90 + T_180` in diffusion mode and `T_readout`
    /// in free mode.
    ///
    /// # Errors
    ///
    /// Returns an error if a required timing field is missing.
    pub fn te_floor(&self) -> Result<f64, ParamsError> {
        let t_readout = self.readout_time()?;
        match self.mode()? {
            SequenceMode::Diffusion => {
                let t_90 = self.t_90.ok_or(ParamsError::MissingField("T_90"))?;
                let t_180 = self.t_180.ok_or(ParamsError::MissingField("T_180"))?;
                Ok(t_readout + t_90 + t_180)
            }
            SequenceMode::Free => Ok(t_readout),
        }
    }
}
