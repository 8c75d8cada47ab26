//! Minimal echo time search over optimized gradient waveforms.
//!
//! # Algorithm
//!
//! The search bisects the echo time range `[min_te, max_te]` (ms). At each
//! midpoint it asks the [`GradientOptimizer`] for a waveform, decides whether
//! the trial is feasible, and keeps the half that still contains the smallest
//! feasible echo time. It stops once the range is no wider than a quarter of
//! the sample interval.
//!
//! Feasibility is an injected [`Feasibility`] policy:
//!
//! - [`TargetBValue`] — the waveform reaches the target diffusion weighting
//! - [`WithinLimits`] — the optimizer reported no violated constraint
//!
//! [`min_te`] picks the policy and default bounds from the sequence mode.
//!
//! # Observer Events
//!
//! The search emits one [`Event`] per trial, after the optimizer ran and the
//! policy was applied (or either failed). Observers can return
//! [`Action::StopEarly`] to halt with the best trial so far, or
//! [`Action::AssumeVerdict`] to override the verdict, for example to treat an
//! optimizer failure as an infeasible trial instead of aborting.
//!
//! [`GradientOptimizer`]: gradte_core::GradientOptimizer

mod action;
mod best;
mod bounds;
mod config;
mod decision;
mod error;
mod evaluate;
mod event;
mod feasibility;
mod search;
mod solution;

pub use action::Action;
pub use bounds::{Bounds, BoundsError};
pub use config::{Config, ConfigError, DEFAULT_TARGET_BVALUE};
pub use error::Error;
pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use event::Event;
pub use feasibility::{Feasibility, ModeFeasibility, TargetBValue, Verdict, WithinLimits};
pub use search::{min_te, min_te_unobserved, search, search_unobserved};
pub use solution::{Solution, Status};
