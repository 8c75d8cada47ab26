use crate::{Bounds, Error, Evaluation, Solution, Status};

/// Tracks the smallest feasible trial encountered so far.
///
/// The `Option` lets us represent the state before any feasible trial.
pub(crate) struct Best {
    eval: Option<Evaluation>,
}

impl Best {
    /// Creates an empty best tracker.
    pub(crate) fn empty() -> Self {
        Self { eval: None }
    }

    /// Keeps `eval` if its echo time is smaller than the current best.
    pub(crate) fn update(&mut self, eval: Evaluation) {
        if let Some(best) = self.eval.as_ref()
            && eval.te >= best.te
        {
            return;
        }
        self.eval = Some(eval);
    }

    /// Finalizes the search using the best feasible trial.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoFeasibleSolution` if no feasible trial is stored.
    pub(crate) fn finish(
        self,
        status: Status,
        iters: usize,
        initial: Bounds,
    ) -> Result<Solution, Error> {
        let eval = self.eval.ok_or(Error::NoFeasibleSolution {
            min_te: initial.lo(),
            max_te: initial.hi(),
            iters,
        })?;
        Ok(Solution {
            status,
            te: eval.te,
            snapshot: eval.snapshot,
            iters,
        })
    }
}
