use gradte_core::{SampleInterval, Waveform};

use crate::constants::{PNS_C, PNS_S_MIN, PNS_THRESHOLD};

/// Estimates peripheral nerve stimulation along the waveform.
///
/// The slew (first difference of `G`) is convolved, time reversed, with the
/// decaying kernel `c / (c + dt (N - 1) - dt i)² / S_min`. The result has
/// `N - 1` entries; magnitudes above 1.0 exceed the stimulation threshold.
#[must_use]
pub fn stimulation_estimate(waveform: &Waveform, dt: SampleInterval) -> Vec<f64> {
    let g = waveform.samples();
    let n = g.len();
    let dt = dt.seconds();

    let coeff: Vec<f64> = (0..n)
        .map(|i| PNS_C / (PNS_C + dt * (n - 1) as f64 - dt * i as f64).powi(2) / PNS_S_MIN)
        .collect();

    (0..n.saturating_sub(1))
        .map(|j| {
            (0..=j)
                .map(|i| coeff[n - 1 - j + i] * (g[i + 1] - g[i]))
                .sum()
        })
        .collect()
}

/// Returns `true` if any estimate exceeds the stimulation threshold.
#[must_use]
pub fn pns_exceeded(estimate: &[f64]) -> bool {
    estimate.iter().any(|s| s.abs() > PNS_THRESHOLD)
}

/// Computes the slew rate `ΔG / dt` in T/m/s; `N - 1` entries.
#[must_use]
pub fn slew_rate(waveform: &Waveform, dt: SampleInterval) -> Vec<f64> {
    let dt = dt.seconds();
    waveform
        .samples()
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) / dt)
        .collect()
}
