use gradte_core::Observer;

use crate::traits::{HasTrialTe, HasVerdict};

/// Reports search progress through the [`log`] facade.
///
/// Emits one `debug` record per trial and a `warn` record for each failed
/// trial. Never alters the search.
#[derive(Debug, Clone)]
pub struct LogObserver {
    target: &'static str,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self {
            target: "gradte::search",
        }
    }
}

impl LogObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs under `target` instead of `gradte::search`.
    #[must_use]
    pub fn with_target(target: &'static str) -> Self {
        Self { target }
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasTrialTe + HasVerdict,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let (iter, te) = (event.iter(), event.trial_te());
        match event.verdict() {
            Some(verdict) => {
                let status = if verdict.is_feasible() { "feasible" } else { "infeasible" };
                log::debug!(target: self.target, "trial {iter}: TE = {te:.4} ms, {status}");
            }
            None => {
                log::warn!(target: self.target, "trial {iter}: TE = {te:.4} ms, optimizer failed");
            }
        }
        None
    }
}
