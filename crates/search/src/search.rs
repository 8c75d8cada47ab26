use gradte_core::{GradientOptimizer, Observer, SequenceParameters};

use crate::{
    Action, Bounds, Config, Error, Event, Feasibility, ModeFeasibility, Solution, Status,
    best::Best, decision::Decision, evaluate::evaluate,
};

/// Finds the smallest feasible echo time with an observer.
///
/// Each trial optimizes a copy of `params` carrying the trial echo time and
/// judges it with `policy`. The range `bounds` must contain the minimal
/// feasible echo time; the trial at `bounds.hi()` itself is never run.
///
/// # Errors
///
/// - [`Error::InvalidParameters`] if `params` has no sample interval or lacks
///   the timing fields of its mode.
/// - [`Error::InvalidBounds`] if `bounds.lo()` does not clear the readout
///   (and pulse) time.
/// - [`Error::OptimizerFailure`] or [`Error::Feasibility`] if a trial fails
///   and the observer does not recover it.
/// - [`Error::NoFeasibleSolution`] if no trial was feasible.
///
/// Parameter and bound errors are raised before the optimizer is called.
pub fn search<O, F, Obs>(
    optimizer: &O,
    policy: &F,
    params: &SequenceParameters,
    bounds: Bounds,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    O: GradientOptimizer,
    F: Feasibility,
    Obs: for<'a> Observer<Event<'a, O, F>, Action>,
{
    let dt = params.sample_interval()?;
    let bounds = bounds.above(params.te_floor()?)?;

    let initial = bounds;
    let mut bounds = bounds;
    let mut best = Best::empty();
    let mut iters = 0;

    while !bounds.is_converged(dt) {
        iters += 1;
        let te = bounds.midpoint();
        let result = evaluate(optimizer, policy, params, te);

        let event = Event {
            iter: iters,
            te,
            bounds,
            result: &result,
        };
        let action = observer.observe(&event);

        // Trials with an assumed verdict are never eligible as the best.
        let decision = match result {
            Ok(eval) => {
                let decision = Decision::resolve(action, Ok(eval.verdict));
                if action.is_none() && eval.verdict.is_feasible() {
                    best.update(eval);
                }
                decision
            }
            Err(err) => Decision::resolve(action, Err(Error::from_eval(te, err))),
        };

        match decision {
            Decision::Shrink(verdict) => bounds.shrink(te, verdict),
            Decision::Stop => return best.finish(Status::StoppedByObserver, iters, initial),
            Decision::Abort(error) => return Err(error),
        }
    }

    best.finish(Status::Converged, iters, initial)
}

/// Finds the smallest feasible echo time without observation.
///
/// # Errors
///
/// Returns an error if the search fails. See [`search`] for details.
pub fn search_unobserved<O, F>(
    optimizer: &O,
    policy: &F,
    params: &SequenceParameters,
    bounds: Bounds,
) -> Result<Solution, Error>
where
    O: GradientOptimizer,
    F: Feasibility,
{
    search(optimizer, policy, params, bounds, ())
}

/// Finds the smallest feasible echo time for the mode named in `params`.
///
/// Diffusion modes search for the shortest echo time reaching the configured
/// target b-value. Free mode searches for the shortest echo time at which the
/// optimizer reports no violated constraint. Unset bounds take the
/// mode defaults from [`Config::bounds`].
///
/// # Errors
///
/// - [`Error::InvalidParameters`] if the mode, timing fields, or sample
///   interval are missing or invalid.
/// - [`Error::InvalidBounds`] if the resolved range is unusable.
/// - Any error returned by [`search`].
pub fn min_te<O, Obs>(
    optimizer: &O,
    params: &SequenceParameters,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: GradientOptimizer,
    Obs: for<'a> Observer<Event<'a, O, ModeFeasibility>, Action>,
{
    let policy = ModeFeasibility::for_params(params, config.target_bvalue())?;
    let bounds = config.bounds(params)?;
    search(optimizer, &policy, params, bounds, observer)
}

/// Finds the smallest feasible echo time for the mode named in `params`
/// without observation.
///
/// # Errors
///
/// Returns an error if the search fails. See [`min_te`] for details.
pub fn min_te_unobserved<O>(
    optimizer: &O,
    params: &SequenceParameters,
    config: &Config,
) -> Result<Solution, Error>
where
    O: GradientOptimizer,
{
    min_te(optimizer, params, config, ())
}
