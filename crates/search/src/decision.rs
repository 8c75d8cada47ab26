use crate::{Action, Error, Verdict};

/// What the search does with a trial once the observer has seen it.
#[derive(Debug)]
pub(crate) enum Decision {
    /// Move one end of the range to the trial echo time.
    Shrink(Verdict),
    Stop,
    Abort(Error),
}

impl Decision {
    /// An observer action takes precedence over the trial outcome, so a
    /// failed trial only aborts when the observer stays silent.
    pub(crate) fn resolve(action: Option<Action>, outcome: Result<Verdict, Error>) -> Self {
        match (action, outcome) {
            (Some(Action::StopEarly), _) => Self::Stop,
            (Some(Action::AssumeVerdict(assumed)), _) => Self::Shrink(assumed),
            (None, Ok(verdict)) => Self::Shrink(verdict),
            (None, Err(error)) => Self::Abort(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> Error {
        Error::OptimizerFailure {
            te: 1.0,
            source: Box::new(std::fmt::Error),
        }
    }

    #[test]
    fn silent_observer_keeps_verdict() {
        let decision = Decision::resolve(None, Ok(Verdict::Infeasible));
        assert!(matches!(decision, Decision::Shrink(Verdict::Infeasible)));
    }

    #[test]
    fn assumed_verdict_recovers_failed_trial() {
        let decision = Decision::resolve(Some(Action::assume_infeasible()), Err(failure()));
        assert!(matches!(decision, Decision::Shrink(Verdict::Infeasible)));
    }

    #[test]
    fn assumed_verdict_overrides_trial() {
        let decision = Decision::resolve(Some(Action::assume_feasible()), Ok(Verdict::Infeasible));
        assert!(matches!(decision, Decision::Shrink(Verdict::Feasible)));
    }

    #[test]
    fn stop_wins_over_any_outcome() {
        let decision = Decision::resolve(Some(Action::StopEarly), Ok(Verdict::Feasible));
        assert!(matches!(decision, Decision::Stop));

        let decision = Decision::resolve(Some(Action::StopEarly), Err(failure()));
        assert!(matches!(decision, Decision::Stop));
    }

    #[test]
    fn failed_trial_aborts() {
        let decision = Decision::resolve(None, Err(failure()));
        assert!(matches!(decision, Decision::Abort(Error::OptimizerFailure { .. })));
    }
}
