use std::{cell::Cell, convert::Infallible};

use approx::assert_relative_eq;
use thiserror::Error;

use gradte_core::{
    CONSTRAINT_VIOLATED_INDEX, DiagnosticVector, GradientOptimizer, OptimizerOutput, ParamsError,
    SequenceParameters, Waveform,
};
use gradte_metrics::b_value;
use gradte_search::{
    Action, Bounds, BoundsError, Config, Error as SearchError, Event, ModeFeasibility, Status,
    TargetBValue, WithinLimits, min_te, min_te_unobserved, search, search_unobserved,
};

/// Quarter of a 10 µs sample, in milliseconds.
const TE_TOL: f64 = 2.5e-3;

fn output(waveform: Vec<f64>, violated: bool) -> OptimizerOutput {
    let mut diagnostics = vec![0.0; 16];
    if violated {
        diagnostics[CONSTRAINT_VIOLATED_INDEX] = 1.0;
    }
    OptimizerOutput::new(
        Waveform::new(waveform).unwrap(),
        DiagnosticVector::new(diagnostics).unwrap(),
    )
}

/// Reports a violated constraint below `threshold` ms.
struct Threshold {
    threshold: f64,
    calls: Cell<usize>,
}

impl Threshold {
    fn new(threshold: f64) -> Self {
        Self {
            threshold,
            calls: Cell::new(0),
        }
    }
}

impl GradientOptimizer for Threshold {
    type Error = Infallible;

    fn optimize(&self, params: &SequenceParameters) -> Result<OptimizerOutput, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        let te = params.te.unwrap_or_default();
        Ok(output(vec![0.0; 8], te < self.threshold))
    }
}

#[derive(Debug, Error)]
#[error("solver diverged at TE = {te}")]
struct Diverged {
    te: f64,
}

/// Fails below `fail_below` ms and satisfies all limits above it.
struct Fragile {
    fail_below: f64,
}

impl GradientOptimizer for Fragile {
    type Error = Diverged;

    fn optimize(&self, params: &SequenceParameters) -> Result<OptimizerOutput, Self::Error> {
        let te = params.te.unwrap_or_default();
        if te < self.fail_below {
            return Err(Diverged { te });
        }
        Ok(output(vec![0.0; 8], false))
    }
}

/// Always returns the same encoding shape, so the b-value grows with TE.
struct FixedShape;

impl FixedShape {
    fn waveform() -> Vec<f64> {
        let mut g = vec![0.0; 100];
        g[..40].fill(0.04);
        g[60..].fill(-0.04);
        g
    }
}

impl GradientOptimizer for FixedShape {
    type Error = Infallible;

    fn optimize(&self, _params: &SequenceParameters) -> Result<OptimizerOutput, Self::Error> {
        Ok(output(Self::waveform(), false))
    }
}

fn free_params() -> SequenceParameters {
    SequenceParameters::free().with_dt(1.0e-5)
}

#[test]
fn free_mode_finds_threshold() {
    let optimizer = Threshold::new(2.0);

    let solution = min_te_unobserved(&optimizer, &free_params(), &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.te >= 2.0);
    assert!(solution.te - 2.0 <= TE_TOL);
    assert_eq!(solution.params().te, Some(solution.te));
    assert_eq!(solution.iters, optimizer.calls.get());
}

#[test]
fn diffusion_mode_reaches_target_bvalue() {
    let params = SequenceParameters::diffusion("diff_bval", 0.0, 4.0, 6.0).with_dt(1.0e-5);
    let waveform = Waveform::new(FixedShape::waveform()).unwrap();
    let target = b_value(&waveform, 60.0, 0.0).unwrap();
    let config = Config::default().with_target_bvalue(target).unwrap();

    let solution = min_te_unobserved(&FixedShape, &params, &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(b_value(solution.waveform(), solution.te, 0.0).unwrap() >= target);
    assert!(b_value(solution.waveform(), solution.te - TE_TOL, 0.0).unwrap() < target);
    assert_relative_eq!(solution.te, 60.0, epsilon = TE_TOL);
}

#[test]
fn never_feasible_reports_range() {
    let optimizer = Threshold::new(10.0);

    let err = min_te_unobserved(&optimizer, &free_params(), &Config::default()).unwrap_err();

    match err {
        SearchError::NoFeasibleSolution { min_te, max_te, iters } => {
            assert_relative_eq!(min_te, 0.1);
            assert_relative_eq!(max_te, 5.0);
            assert_eq!(iters, optimizer.calls.get());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn optimizer_failure_propagates_with_source() {
    let optimizer = Fragile { fail_below: 100.0 };
    let bounds = Bounds::new(0.1, 5.0).unwrap();

    let err = search_unobserved(&optimizer, &WithinLimits, &free_params(), bounds).unwrap_err();

    let SearchError::OptimizerFailure { te, source } = err else {
        panic!("expected optimizer failure, got {err}");
    };
    assert_relative_eq!(te, 2.55);
    let diverged = source.downcast_ref::<Diverged>().expect("original error kept");
    assert_relative_eq!(diverged.te, te);
}

#[test]
fn observer_can_treat_failures_as_infeasible() {
    let optimizer = Fragile { fail_below: 2.0 };
    let bounds = Bounds::new(0.1, 5.0).unwrap();

    let observer = |event: &Event<'_, _, _>| {
        if event.is_failure() {
            Some(Action::assume_infeasible())
        } else {
            None
        }
    };

    let solution = search(&optimizer, &WithinLimits, &free_params(), bounds, observer)
        .expect("failures are recovered");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.te >= 2.0);
    assert!(solution.te - 2.0 <= TE_TOL);
}

#[test]
fn missing_sample_interval_skips_optimizer() {
    let optimizer = Threshold::new(2.0);
    let params = SequenceParameters::free();

    let err = min_te_unobserved(&optimizer, &params, &Config::default()).unwrap_err();

    assert!(matches!(
        err,
        SearchError::InvalidParameters(ParamsError::MissingField(_))
    ));
    assert_eq!(optimizer.calls.get(), 0);
}

#[test]
fn unknown_mode_is_rejected() {
    let optimizer = Threshold::new(2.0);
    let mut params = free_params();
    params.mode = "spiral".into();

    let err = min_te_unobserved(&optimizer, &params, &Config::default()).unwrap_err();

    assert!(matches!(
        err,
        SearchError::InvalidParameters(ParamsError::UnknownMode(_))
    ));
    assert_eq!(optimizer.calls.get(), 0);
}

#[test]
fn bounds_inside_readout_skip_optimizer() {
    let optimizer = Threshold::new(2.0);
    let params = SequenceParameters::diffusion("diff_bval", 16.0, 4.0, 6.0).with_dt(1.0e-5);
    let policy = TargetBValue::new(1000.0, 16.0);
    let bounds = Bounds::new(0.1, 5.0).unwrap();

    let err = search_unobserved(&optimizer, &policy, &params, bounds).unwrap_err();

    assert!(matches!(
        err,
        SearchError::InvalidBounds(BoundsError::BelowFloor { .. })
    ));
    assert_eq!(optimizer.calls.get(), 0);
}

#[test]
fn free_bounds_must_clear_readout() {
    let optimizer = Threshold::new(2.0);
    let mut params = free_params();
    params.t_readout = Some(1.0);
    let bounds = Bounds::new(0.5, 5.0).unwrap();

    let err = search_unobserved(&optimizer, &WithinLimits, &params, bounds).unwrap_err();

    assert!(matches!(
        err,
        SearchError::InvalidBounds(BoundsError::BelowFloor { .. })
    ));
    assert_eq!(optimizer.calls.get(), 0);
}

#[test]
fn stop_early_returns_best_so_far() {
    let optimizer = Threshold::new(2.0);

    // Trials: 2.55 (feasible), 1.325, 1.9375.
    let observer = |event: &Event<'_, _, _>| (event.iter == 3).then_some(Action::StopEarly);

    let solution = min_te(&optimizer, &free_params(), &Config::default(), observer)
        .expect("feasible trial recorded");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_relative_eq!(solution.te, 2.55);
    assert_eq!(solution.iters, 3);
}

#[test]
fn stop_early_without_feasible_trial_errors() {
    let optimizer = Threshold::new(2.0);

    let observer = |_event: &Event<'_, _, _>| Some(Action::StopEarly);

    let err = min_te(&optimizer, &free_params(), &Config::default(), observer).unwrap_err();

    assert!(matches!(err, SearchError::NoFeasibleSolution { iters: 1, .. }));
}

#[test]
fn assumed_feasible_trial_is_not_the_best() {
    let optimizer = Threshold::new(2.0);

    // The first trial (2.55) is assumed feasible, all others run normally.
    let observer = |event: &Event<'_, _, _>| (event.iter == 1).then(Action::assume_feasible);

    let solution = min_te(&optimizer, &free_params(), &Config::default(), observer)
        .expect("should converge");

    assert!(solution.te >= 2.0);
    assert!(solution.te < 2.55);
}

#[test]
fn every_trial_sees_its_own_echo_time() {
    let optimizer = Threshold::new(2.0);
    let params = free_params();
    let mut trials = Vec::new();

    let observer = |event: &Event<'_, Threshold, ModeFeasibility>| -> Option<Action> {
        let eval = event.result.as_ref().expect("infallible optimizer");
        trials.push((event.te, eval.snapshot.input.te, event.bounds));
        None
    };

    min_te(&optimizer, &params, &Config::default(), observer).expect("should converge");

    assert_eq!(params.te, None);
    assert!(!trials.is_empty());
    for (te, input_te, bounds) in trials {
        assert_eq!(input_te, Some(te));
        assert!(te > 0.1 && te < 5.0);
        assert!(te > bounds.lo() && te < bounds.hi());
    }
}
