use std::f64::consts::PI;

use gradte_core::{SampleInterval, TimingError, Waveform};

use crate::{RefocusingMask, constants::GAMMA};

/// Computes the b-value (s/mm²) of a diffusion waveform.
///
/// The waveform is assumed to fill the time between the end of the readout
/// and the echo, giving `dt = (te - t_readout) * 1e-3 / N`. The zeroth moment
/// is integrated with a sign flip at the refocusing pulse and its square is
/// accumulated over all samples. Times are in milliseconds.
///
/// # Errors
///
/// Returns a [`TimingError`] if `te` does not exceed `t_readout`.
pub fn b_value(waveform: &Waveform, te: f64, t_readout: f64) -> Result<f64, TimingError> {
    let n = waveform.len();
    let dt = SampleInterval::from_echo(te, t_readout, n)?;
    let mask = RefocusingMask::new(n, dt, te);
    let dt = dt.seconds();

    let mut gt = 0.0;
    let mut bval = 0.0;
    for (g, sign) in waveform.samples().iter().zip(mask.signs()) {
        gt += sign * g * dt;
        bval += gt * gt * dt;
    }

    Ok(bval * (GAMMA * 2.0 * PI).powi(2))
}
