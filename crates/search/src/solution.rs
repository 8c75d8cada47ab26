use gradte_core::{OptimizerOutput, SequenceParameters, Snapshot, Waveform};

/// Indicates how the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The echo time range shrank below the tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a minimal echo time search.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// Smallest feasible echo time found (ms).
    pub te: f64,

    /// Parameters (carrying `te`) and optimizer output of the winning trial.
    pub snapshot: Snapshot<SequenceParameters, OptimizerOutput>,

    /// Number of trials run.
    pub iters: usize,
}

impl Solution {
    /// Returns the winning waveform.
    #[must_use]
    pub fn waveform(&self) -> &Waveform {
        &self.snapshot.output.waveform
    }

    /// Returns the parameters of the winning trial.
    #[must_use]
    pub fn params(&self) -> &SequenceParameters {
        &self.snapshot.input
    }
}
