use gradte_core::GradientOptimizer;

use crate::{Bounds, EvaluateResult, Feasibility, Verdict};

/// Event emitted by the search for each trial.
pub struct Event<'a, O, F>
where
    O: GradientOptimizer,
    F: Feasibility,
{
    /// Trial counter, starting at 1.
    pub iter: usize,
    /// The echo time that was tried (ms).
    pub te: f64,
    /// The range the trial was taken from.
    pub bounds: Bounds,
    /// The result of the trial.
    pub result: &'a EvaluateResult<O, F>,
}

impl<O, F> Event<'_, O, F>
where
    O: GradientOptimizer,
    F: Feasibility,
{
    /// Returns the verdict, or `None` if the trial failed.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.result.as_ref().ok().map(|eval| eval.verdict)
    }

    /// Returns true if the optimizer or the policy failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}
