use gradte_core::{SampleInterval, Waveform};
use thiserror::Error;

/// Errors that can occur when constructing a [`TimeConstant`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TimeConstantError {
    #[error("time constant must be finite and strictly positive, got {value}")]
    NonPositive { value: f64 },
}

/// Decay time constant of a single-exponential eddy current.
///
/// Sweeps are usually specified in milliseconds while the kernels work in
/// seconds; the constructors make the unit explicit so the conversion happens
/// exactly once.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeConstant(f64);

impl TimeConstant {
    /// Creates a time constant from a value in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if `seconds` is not finite and strictly positive.
    pub fn from_seconds(seconds: f64) -> Result<Self, TimeConstantError> {
        if seconds.is_finite() && seconds > 0.0 {
            Ok(Self(seconds))
        } else {
            Err(TimeConstantError::NonPositive { value: seconds })
        }
    }

    /// Creates a time constant from a value in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if `millis` is not finite and strictly positive.
    pub fn from_millis(millis: f64) -> Result<Self, TimeConstantError> {
        Self::from_seconds(millis * 1.0e-3)
            .map_err(|_| TimeConstantError::NonPositive { value: millis })
    }

    /// Returns the time constant in seconds.
    #[must_use]
    pub fn seconds(self) -> f64 {
        self.0
    }
}

/// Which eddy current response to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EddyMode {
    /// Residual eddy field amplitude at the end of the waveform: the
    /// waveform convolved with a causal exponential impulse response.
    Amplitude,
    /// Gradient sensitivity: a boundary term at the first sample plus a
    /// per-sample exponential weight.
    Sensitivity,
}

/// Builds the eddy current kernel for an `n`-sample waveform.
///
/// The response of a waveform is the dot product of this kernel with its
/// samples; see [`eddy_current_response`].
#[must_use]
pub fn eddy_kernel(n: usize, lambda: TimeConstant, dt: SampleInterval, mode: EddyMode) -> Vec<f64> {
    let lam = lambda.seconds();
    let dt = dt.seconds();
    let decay = |ii: f64| (-ii * dt / lam).exp();

    match mode {
        EddyMode::Amplitude => (0..n)
            .map(|i| {
                let ii = (n - i - 1) as f64;
                let val = if i == 0 {
                    -decay(ii)
                } else {
                    decay(ii + 1.0) - decay(ii)
                };
                -val
            })
            .collect(),
        EddyMode::Sensitivity => {
            let mut kernel = Vec::with_capacity(n);
            let boundary: f64 = (0..n).map(|i| -decay((n - i - 1) as f64)).sum();
            kernel.push(boundary * 1.0e3 * dt);
            kernel.extend((1..n).map(|i| -decay((n - i) as f64) * 1.0e3 * dt));
            kernel
        }
    }
}

/// Evaluates the eddy current response of a waveform for one time constant.
#[must_use]
pub fn eddy_current_response(
    waveform: &Waveform,
    lambda: TimeConstant,
    dt: SampleInterval,
    mode: EddyMode,
) -> f64 {
    eddy_kernel(waveform.len(), lambda, dt, mode)
        .iter()
        .zip(waveform.samples())
        .map(|(e, g)| e * g)
        .sum()
}
