use gradte_core::Observer;

use crate::traits::{CanAssumeInfeasible, HasVerdict};

/// Treats failed trials as infeasible instead of aborting the search.
///
/// An optimizer that cannot find a waveform at a trial echo time usually
/// means the echo time is too short, so recovering pushes the search toward
/// longer echo times. Set a limit to abort once too many trials failed.
#[derive(Debug, Clone, Default)]
pub struct RecoverFailures {
    limit: Option<usize>,
    failures: usize,
}

impl RecoverFailures {
    /// Recovers every failed trial.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recovers at most `limit` failed trials. Later failures abort the search.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            failures: 0,
        }
    }

    /// Returns the number of failed trials seen so far.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }
}

impl<E: HasVerdict, A: CanAssumeInfeasible> Observer<E, A> for RecoverFailures {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.verdict().is_some() {
            return None;
        }
        self.failures += 1;
        match self.limit {
            Some(limit) if self.failures > limit => None,
            _ => Some(A::assume_infeasible()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gradte_search::{Action, Verdict};

    struct Trial(Option<Verdict>);

    impl HasVerdict for Trial {
        fn verdict(&self) -> Option<Verdict> {
            self.0
        }
    }

    #[test]
    fn ignores_successful_trials() {
        let mut recover = RecoverFailures::new();
        let action: Option<Action> = recover.observe(&Trial(Some(Verdict::Feasible)));
        assert_eq!(action, None);
        assert_eq!(recover.failures(), 0);
    }

    #[test]
    fn recovers_failures_up_to_limit() {
        let mut recover = RecoverFailures::with_limit(2);
        let failed = Trial(None);

        let actions: Vec<Option<Action>> = (0..3).map(|_| recover.observe(&failed)).collect();

        assert_eq!(
            actions,
            vec![
                Some(Action::assume_infeasible()),
                Some(Action::assume_infeasible()),
                None
            ]
        );
        assert_eq!(recover.failures(), 3);
    }
}
