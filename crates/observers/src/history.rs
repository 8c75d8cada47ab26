use gradte_search::Verdict;

use crate::traits::{HasTrialTe, HasVerdict};

/// One recorded trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub iter: usize,
    /// Trial echo time in milliseconds.
    pub te: f64,
    /// `None` when the optimizer or policy failed.
    pub verdict: Option<Verdict>,
}

/// Records every trial of a search for later inspection.
///
/// The history is filled from an observer closure, so the caller keeps
/// ownership once the search returns:
///
/// ```ignore
/// let mut history = TrialHistory::new();
/// let solution = min_te(&optimizer, &params, &config, |event: &Event<'_, _, _>| {
///     history.record_event(event);
///     None
/// })?;
/// println!("{} trials", history.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrialHistory {
    trials: Vec<Trial>,
}

impl TrialHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a single trial.
    pub fn record(&mut self, iter: usize, te: f64, verdict: Option<Verdict>) {
        self.trials.push(Trial { iter, te, verdict });
    }

    /// Records the trial carried by a search event.
    pub fn record_event<E: HasTrialTe + HasVerdict>(&mut self, event: &E) {
        self.record(event.iter(), event.trial_te(), event.verdict());
    }

    #[must_use]
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Returns the echo times of feasible trials, in trial order.
    pub fn feasible(&self) -> impl Iterator<Item = f64> + '_ {
        self.trials
            .iter()
            .filter(|t| t.verdict.is_some_and(Verdict::is_feasible))
            .map(|t| t.te)
    }

    /// Returns the number of failed trials.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.trials.iter().filter(|t| t.verdict.is_none()).count()
    }
}
