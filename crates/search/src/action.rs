use crate::Verdict;

/// Control actions supported by the minimal echo time search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search early and return the best trial found so far.
    StopEarly,

    /// Assume a verdict for the range update.
    ///
    /// This action is mainly used for error recovery, such as treating an
    /// optimizer failure as an infeasible trial. If used on a successful
    /// evaluation, that evaluation is not considered for the best solution.
    AssumeVerdict(Verdict),
}

impl Action {
    /// Assumes the trial met the target.
    #[must_use]
    pub fn assume_feasible() -> Self {
        Self::AssumeVerdict(Verdict::Feasible)
    }

    /// Assumes the trial missed the target.
    #[must_use]
    pub fn assume_infeasible() -> Self {
        Self::AssumeVerdict(Verdict::Infeasible)
    }
}
