//! Physics metrics for time-discretized MRI gradient waveforms.
//!
//! Every function here is pure: it takes a [`Waveform`] and timing values and
//! returns derived quantities without touching shared state, so a renderer or
//! report can request any subset independently.
//!
//! - [`b_value`] — diffusion weighting strength in s/mm²
//! - [`moments`] and [`cumulative_moments`] — gradient moments of order 0..4
//! - [`eddy_current_response`] and [`EddySweep`] — single-exponential eddy
//!   current response, at one time constant or across a range
//! - [`stimulation_estimate`] — peripheral nerve stimulation proxy
//! - [`slew_rate`] — first difference of the waveform over `dt`
//!
//! All diffusion metrics split the waveform at the refocusing pulse using one
//! shared [`RefocusingMask`].
//!
//! [`Waveform`]: gradte_core::Waveform

pub mod constants;

mod bvalue;
mod eddy;
mod mask;
mod moments;
mod stimulation;
mod sweep;

pub use bvalue::b_value;
pub use eddy::{EddyMode, TimeConstant, TimeConstantError, eddy_current_response, eddy_kernel};
pub use mask::RefocusingMask;
pub use moments::{cumulative_moments, moments};
pub use stimulation::{pns_exceeded, slew_rate, stimulation_estimate};
pub use sweep::{EddyCurves, EddySpectrum, EddySweep, SweepError};
