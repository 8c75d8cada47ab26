//! Physical constants used by the waveform metrics.

/// Proton gyromagnetic ratio in Hz/mT.
pub const GAMMA: f64 = 42.58e3;

/// Number of gradient moment orders reported (0 through 4).
pub const MOMENT_ORDERS: usize = 5;

/// PNS model: dimensionless effective stimulation fraction.
pub const PNS_ALPHA: f64 = 0.333;

/// PNS model: rheobase in T/m/s.
pub const PNS_R: f64 = 23.4;

/// PNS model: chronaxie time in seconds.
pub const PNS_C: f64 = 334e-6;

/// PNS model: minimum stimulation slew rate, `r / alpha`.
pub const PNS_S_MIN: f64 = PNS_R / PNS_ALPHA;

/// PNS model: estimates above this magnitude exceed the stimulation threshold.
pub const PNS_THRESHOLD: f64 = 1.0;
