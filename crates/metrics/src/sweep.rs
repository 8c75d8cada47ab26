use gradte_core::{SampleInterval, Waveform};
use thiserror::Error;

use crate::{EddyMode, TimeConstant, eddy_current_response};

/// Errors that can occur when configuring an [`EddySweep`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SweepError {
    #[error("sweep needs at least one time constant")]
    Empty,

    #[error("invalid time constant range [{lo}, {hi}] ms")]
    InvalidRange { lo: f64, hi: f64 },
}

/// Evenly spaced eddy current time constants, in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct EddySweep {
    lambdas_ms: Vec<f64>,
    constants: Vec<TimeConstant>,
}

/// Eddy current responses of one waveform across a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct EddyCurves {
    /// Time constants in milliseconds.
    pub lambdas_ms: Vec<f64>,
    /// [`EddyMode::Amplitude`] response at each time constant.
    pub amplitude: Vec<f64>,
    /// [`EddyMode::Sensitivity`] response at each time constant.
    pub sensitivity: Vec<f64>,
}

/// Percent eddy field remaining at the end of a waveform.
#[derive(Debug, Clone, PartialEq)]
pub struct EddySpectrum {
    /// Time constants in milliseconds.
    pub lambdas_ms: Vec<f64>,
    /// Response in percent of a unit gradient at each time constant.
    pub percent: Vec<f64>,
}

impl EddySweep {
    /// Smallest time constant of a sweep created with [`EddySweep::new`].
    pub const MIN_LAMBDA_MS: f64 = 1.0e-4;

    /// Creates `n` time constants from [`MIN_LAMBDA_MS`](Self::MIN_LAMBDA_MS)
    /// up to `max_ms`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero or `max_ms` is below the minimum.
    pub fn new(max_ms: f64, n: usize) -> Result<Self, SweepError> {
        Self::with_range(Self::MIN_LAMBDA_MS, max_ms, n)
    }

    /// Creates `n` evenly spaced time constants in `[lo_ms, hi_ms]`.
    ///
    /// Both endpoints are included; a single-point sweep holds only `lo_ms`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero, or the range is not finite, positive
    /// and ordered. A range whose lower end vanishes when converted to
    /// seconds is rejected as well.
    pub fn with_range(lo_ms: f64, hi_ms: f64, n: usize) -> Result<Self, SweepError> {
        if n == 0 {
            return Err(SweepError::Empty);
        }
        let invalid = SweepError::InvalidRange {
            lo: lo_ms,
            hi: hi_ms,
        };
        if !lo_ms.is_finite() || !hi_ms.is_finite() || lo_ms <= 0.0 || hi_ms < lo_ms {
            return Err(invalid);
        }

        let lambdas_ms = if n == 1 {
            vec![lo_ms]
        } else {
            let step = (hi_ms - lo_ms) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| i as f64 * step + lo_ms).collect();
            values[n - 1] = hi_ms;
            values
        };

        let constants = lambdas_ms
            .iter()
            .map(|&ms| TimeConstant::from_millis(ms))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid)?;

        Ok(Self {
            lambdas_ms,
            constants,
        })
    }

    /// Returns the time constants in milliseconds.
    #[must_use]
    pub fn lambdas_ms(&self) -> &[f64] {
        &self.lambdas_ms
    }

    /// Evaluates both eddy current modes at every time constant.
    #[must_use]
    pub fn sample(&self, waveform: &Waveform, dt: SampleInterval) -> EddyCurves {
        let (amplitude, sensitivity) = self
            .time_constants()
            .map(|lam| {
                (
                    eddy_current_response(waveform, lam, dt, EddyMode::Amplitude),
                    eddy_current_response(waveform, lam, dt, EddyMode::Sensitivity),
                )
            })
            .unzip();

        EddyCurves {
            lambdas_ms: self.lambdas_ms.clone(),
            amplitude,
            sensitivity,
        }
    }

    /// Evaluates the end-of-waveform eddy field in percent.
    ///
    /// Each value is `100 · Σ r_i · G_i`, where `r` is the step response
    /// `exp(-(N - i) dt / λ) - exp(-(N - 1 - i) dt / λ)`.
    #[must_use]
    pub fn spectrum(&self, waveform: &Waveform, dt: SampleInterval) -> EddySpectrum {
        let n = waveform.len();
        let dt = dt.seconds();
        let percent = self
            .time_constants()
            .map(|lam| {
                let lam = lam.seconds();
                let decay = |k: usize| (-(k as f64) * dt / lam).exp();
                let response: f64 = waveform
                    .samples()
                    .iter()
                    .enumerate()
                    .map(|(i, g)| (decay(n - i) - decay(n - 1 - i)) * g)
                    .sum();
                100.0 * response
            })
            .collect();

        EddySpectrum {
            lambdas_ms: self.lambdas_ms.clone(),
            percent,
        }
    }

    fn time_constants(&self) -> impl Iterator<Item = TimeConstant> + '_ {
        self.constants.iter().copied()
    }
}
