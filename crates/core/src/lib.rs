//! Core traits and types for gradient waveform evaluation and TE search.
//!
//! This crate defines the shared abstractions that metrics, the echo time
//! search, and observers build on:
//!
//! - [`Waveform`] and [`SampleInterval`] — a validated gradient waveform and
//!   its time step
//! - [`SequenceParameters`] — the parameter record handed to the optimizer
//! - [`GradientOptimizer`] — the external solver that turns parameters into a
//!   waveform and a [`DiagnosticVector`]
//! - [`Snapshot`] — a captured input/output pair from an optimizer call
//! - [`Observer`] — receives search events and optionally returns control actions

mod diagnostics;
mod observer;
mod optimizer;
mod params;
mod waveform;

pub use diagnostics::{CONSTRAINT_VIOLATED_INDEX, DiagnosticVector, DiagnosticsError};
pub use observer::Observer;
pub use optimizer::{GradientOptimizer, OptimizerOutput, Snapshot};
pub use params::{LoadError, ParamsError, SequenceMode, SequenceParameters};
pub use waveform::{SampleInterval, TimingError, Waveform, WaveformError};
