//! Capability traits for echo time search observers.
//!
//! These traits abstract over the search's event and action types, so an
//! observer can be written once and used with any optimizer and feasibility
//! policy.
//!
//! # Event traits
//!
//! - [`HasTrialTe`] — events that carry a trial echo time
//! - [`HasVerdict`] — events that carry a feasibility verdict
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanAssumeInfeasible`] — actions that can override a trial as infeasible
//!
//! # Example
//!
//! ```rust
//! use gradte_core::Observer;
//! use gradte_observers::traits::{CanStopEarly, HasVerdict};
//!
//! /// Stops after the first feasible trial.
//! struct FirstFeasible;
//!
//! impl<E: HasVerdict, A: CanStopEarly> Observer<E, A> for FirstFeasible {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         event
//!             .verdict()
//!             .is_some_and(|v| v.is_feasible())
//!             .then(A::stop_early)
//!     }
//! }
//! ```

use gradte_core::GradientOptimizer;
use gradte_search::{Action, Event, Feasibility, Verdict};

/// An event that carries a trial echo time.
pub trait HasTrialTe {
    /// Returns the trial counter, starting at 1.
    fn iter(&self) -> usize;

    /// Returns the trial echo time in milliseconds.
    fn trial_te(&self) -> f64;
}

/// An event that carries a feasibility verdict.
pub trait HasVerdict {
    /// Returns the verdict, or `None` when the trial failed.
    fn verdict(&self) -> Option<Verdict>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the search early.
    fn stop_early() -> Self;
}

/// An action type that can override a trial as infeasible.
pub trait CanAssumeInfeasible {
    /// Returns the action that treats the trial as infeasible.
    fn assume_infeasible() -> Self;
}

impl<O, F> HasTrialTe for Event<'_, O, F>
where
    O: GradientOptimizer,
    F: Feasibility,
{
    fn iter(&self) -> usize {
        self.iter
    }

    fn trial_te(&self) -> f64 {
        self.te
    }
}

impl<O, F> HasVerdict for Event<'_, O, F>
where
    O: GradientOptimizer,
    F: Feasibility,
{
    fn verdict(&self) -> Option<Verdict> {
        Event::verdict(self)
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeInfeasible for Action {
    fn assume_infeasible() -> Self {
        Action::assume_infeasible()
    }
}
