use gradte_core::{SampleInterval, Waveform};

use crate::{
    RefocusingMask,
    constants::{GAMMA, MOMENT_ORDERS},
};

/// Computes the magnitudes of the gradient moments of order 0 through 4.
///
/// Order `m` is `|γ · dt · Σ t_i^m · G_i · INV_i|` with `t_i = i · dt`. The
/// echo time used for the refocusing split is `N · dt · 1e3 + t_readout` (ms).
#[must_use]
pub fn moments(waveform: &Waveform, t_readout: f64, dt: SampleInterval) -> [f64; MOMENT_ORDERS] {
    let mask = refocused_mask(waveform, t_readout, dt);
    let signed = signed_samples(waveform, &mask);
    let dt = dt.seconds();

    std::array::from_fn(|order| {
        let sum: f64 = signed
            .iter()
            .enumerate()
            .map(|(i, g)| time_power(i, dt, order) * g)
            .sum();
        (GAMMA * dt * sum).abs()
    })
}

/// Computes running (cumulative) moment curves for orders 0 through 4.
///
/// Entry `k` of curve `m` is the signed moment integrated up to sample `k`.
/// With `refocused = false` the refocusing sign flip is not applied, which
/// suits modes without a 180° pulse.
#[must_use]
pub fn cumulative_moments(
    waveform: &Waveform,
    t_readout: f64,
    dt: SampleInterval,
    refocused: bool,
) -> [Vec<f64>; MOMENT_ORDERS] {
    let mask = if refocused {
        refocused_mask(waveform, t_readout, dt)
    } else {
        RefocusingMask::none(waveform.len())
    };
    let signed = signed_samples(waveform, &mask);
    let dt = dt.seconds();

    std::array::from_fn(|order| {
        signed
            .iter()
            .enumerate()
            .scan(0.0, |acc, (i, g)| {
                *acc += GAMMA * dt * time_power(i, dt, order) * g;
                Some(*acc)
            })
            .collect()
    })
}

fn refocused_mask(waveform: &Waveform, t_readout: f64, dt: SampleInterval) -> RefocusingMask {
    let te = waveform.len() as f64 * dt.seconds() * 1.0e3 + t_readout;
    RefocusingMask::new(waveform.len(), dt, te)
}

fn signed_samples(waveform: &Waveform, mask: &RefocusingMask) -> Vec<f64> {
    waveform
        .samples()
        .iter()
        .zip(mask.signs())
        .map(|(g, sign)| g * sign)
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn time_power(i: usize, dt: f64, order: usize) -> f64 {
    (i as f64 * dt).powi(order as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn dt(seconds: f64) -> SampleInterval {
        SampleInterval::new(seconds).unwrap()
    }

    #[test]
    fn zero_waveform_has_zero_moments() {
        let g = Waveform::new(vec![0.0; 32]).unwrap();
        assert_eq!(moments(&g, 10.0, dt(1e-5)), [0.0; MOMENT_ORDERS]);
    }

    #[test]
    fn hand_computed_small_waveform() {
        // G = [1, 1, -1, -1] mT/m, dt = 1 ms, no readout: t_inv = 2, so the
        // refocused waveform is [1, 1, 1, 1] mT/m.
        let g = Waveform::new(vec![1e-3, 1e-3, -1e-3, -1e-3]).unwrap();
        let m = moments(&g, 0.0, dt(1e-3));

        assert_relative_eq!(m[0], GAMMA * 1e-3 * 4.0e-3, max_relative = 1e-12);
        // Σ t_i = (0 + 1 + 2 + 3) ms
        assert_relative_eq!(m[1], GAMMA * 1e-3 * 6.0e-3 * 1e-3, max_relative = 1e-12);
        // Σ t_i² = (0 + 1 + 4 + 9) ms²
        assert_relative_eq!(m[2], GAMMA * 1e-3 * 14.0e-3 * 1e-6, max_relative = 1e-12);
    }

    #[test]
    fn sign_flip_starts_at_inversion_index() {
        // A single non-zero sample right at t_inv = 2 must be inverted, one
        // sample earlier must not.
        let at_inv = Waveform::new(vec![0.0, 0.0, 1e-3, 0.0]).unwrap();
        let before = Waveform::new(vec![0.0, 1e-3, 0.0, 0.0]).unwrap();

        let curves = cumulative_moments(&at_inv, 0.0, dt(1e-3), true);
        assert!(curves[0][3] < 0.0);

        let curves = cumulative_moments(&before, 0.0, dt(1e-3), true);
        assert!(curves[0][3] > 0.0);
    }

    #[test]
    fn cumulative_curves_end_at_moment_magnitudes() {
        let samples = (0..50).map(|i| (f64::from(i) * 0.3).cos() * 0.02).collect();
        let g = Waveform::new(samples).unwrap();
        let dt = dt(2e-5);
        let m = moments(&g, 5.0, dt);
        let curves = cumulative_moments(&g, 5.0, dt, true);

        for order in 0..MOMENT_ORDERS {
            assert_eq!(curves[order].len(), 50);
            assert_relative_eq!(curves[order][49].abs(), m[order], max_relative = 1e-9);
        }
    }

    #[test]
    fn unrefocused_curves_skip_inversion() {
        let g = Waveform::new(vec![1e-3, 1e-3, -1e-3, -1e-3]).unwrap();
        let curves = cumulative_moments(&g, 0.0, dt(1e-3), false);
        assert_relative_eq!(curves[0][3], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn is_repeatable() {
        let g = Waveform::new((0..80).map(|i| f64::from(i % 7) * 1e-3).collect()).unwrap();
        let a = moments(&g, 8.0, dt(1e-5));
        let b = moments(&g, 8.0, dt(1e-5));
        assert_eq!(a.map(f64::to_bits), b.map(f64::to_bits));
    }
}
