use thiserror::Error;

/// Errors that can occur when constructing a [`Waveform`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum WaveformError {
    #[error("waveform has no samples")]
    Empty,

    #[error("non-finite sample {value} at index {index}")]
    NonFinite { index: usize, value: f64 },
}

/// Errors that can occur when deriving or validating a sample interval.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TimingError {
    #[error("sample interval must be finite and strictly positive, got {dt}")]
    NonPositive { dt: f64 },

    #[error("echo time {te} ms does not exceed readout time {t_readout} ms")]
    EchoBeforeReadout { te: f64, t_readout: f64 },
}

/// A gradient waveform sampled at a fixed time step.
///
/// Amplitudes are in T/m. A waveform always holds at least one finite sample
/// and cannot be modified after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f64>,
}

impl Waveform {
    /// Creates a waveform from gradient amplitudes.
    ///
    /// # Errors
    ///
    /// Returns [`WaveformError::Empty`] if `samples` is empty, or
    /// [`WaveformError::NonFinite`] for the first NaN or infinite sample.
    pub fn new(samples: Vec<f64>) -> Result<Self, WaveformError> {
        if samples.is_empty() {
            return Err(WaveformError::Empty);
        }
        if let Some((index, &value)) = samples.iter().enumerate().find(|(_, g)| !g.is_finite()) {
            return Err(WaveformError::NonFinite { index, value });
        }
        Ok(Self { samples })
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the gradient amplitudes.
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Total duration `N * dt` in seconds.
    #[must_use]
    pub fn duration(&self, dt: SampleInterval) -> f64 {
        self.samples.len() as f64 * dt.seconds()
    }
}

impl AsRef<[f64]> for Waveform {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

impl TryFrom<Vec<f64>> for Waveform {
    type Error = WaveformError;

    fn try_from(samples: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(samples)
    }
}

/// A strictly positive, finite sample interval in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SampleInterval(f64);

impl SampleInterval {
    /// Creates a sample interval from a value in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TimingError::NonPositive`] if `dt` is not finite and > 0.
    pub fn new(dt: f64) -> Result<Self, TimingError> {
        if dt.is_finite() && dt > 0.0 {
            Ok(Self(dt))
        } else {
            Err(TimingError::NonPositive { dt })
        }
    }

    /// Derives the interval of an `n`-sample waveform that fills the time
    /// between the readout and the echo: `(te - t_readout) * 1e-3 / n`.
    ///
    /// Both times are in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`TimingError::EchoBeforeReadout`] if `te <= t_readout`, or
    /// [`TimingError::NonPositive`] if the result is not a valid interval.
    pub fn from_echo(te: f64, t_readout: f64, n: usize) -> Result<Self, TimingError> {
        if te <= t_readout {
            return Err(TimingError::EchoBeforeReadout { te, t_readout });
        }
        Self::new((te - t_readout) * 1.0e-3 / n as f64)
    }

    /// Returns the interval in seconds.
    #[must_use]
    pub fn seconds(self) -> f64 {
        self.0
    }
}
