//! Reusable observers for the gradte echo time search.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any optimizer and feasibility policy.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for search observers
//!   ([`HasTrialTe`], [`HasVerdict`], [`CanStopEarly`], [`CanAssumeInfeasible`])
//!
//! # Observers
//!
//! - [`LogObserver`] — reports each trial through the `log` facade
//! - [`RecoverFailures`] — treats optimizer failures as infeasible trials
//! - [`TrialHistory`] — records trials from an observer closure
//!
//! [`Observer`]: gradte_core::Observer
//! [`HasTrialTe`]: traits::HasTrialTe
//! [`HasVerdict`]: traits::HasVerdict
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeInfeasible`]: traits::CanAssumeInfeasible

pub mod traits;

mod history;
mod logging;
mod recover;

pub use history::{Trial, TrialHistory};
pub use logging::LogObserver;
pub use recover::RecoverFailures;
