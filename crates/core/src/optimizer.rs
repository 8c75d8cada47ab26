use crate::{DiagnosticVector, SequenceParameters, Waveform};

/// The external gradient waveform optimizer.
///
/// Given a parameter set (including a trial echo time), an optimizer returns
/// a candidate waveform and a diagnostic vector. Optimizers must be
/// deterministic, always producing the same result for a given input, which
/// the echo time search relies on to converge.
pub trait GradientOptimizer {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs the optimizer for the given parameters.
    ///
    /// # Errors
    ///
    /// Each optimizer defines its own `Error` type for solver failures.
    fn optimize(&self, params: &SequenceParameters) -> Result<OptimizerOutput, Self::Error>;
}

/// A waveform and the diagnostics reported with it.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerOutput {
    pub waveform: Waveform,
    pub diagnostics: DiagnosticVector,
}

impl OptimizerOutput {
    /// Creates an output from a waveform and its diagnostics.
    #[must_use]
    pub fn new(waveform: Waveform, diagnostics: DiagnosticVector) -> Self {
        Self {
            waveform,
            diagnostics,
        }
    }
}

/// A captured input/output pair from an optimizer call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
