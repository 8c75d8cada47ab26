use thiserror::Error;

use gradte_core::{GradientOptimizer, OptimizerOutput, SequenceParameters, Snapshot};

use crate::{Feasibility, Verdict};

/// The result of running one trial echo time.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Trial echo time in milliseconds.
    pub te: f64,
    pub verdict: Verdict,
    /// Parameters sent to the optimizer (carrying `te`) and its output.
    pub snapshot: Snapshot<SequenceParameters, OptimizerOutput>,
}

/// Errors that can occur when evaluating a trial.
#[derive(Debug, Error)]
pub enum EvalError<OE, FE> {
    /// The optimizer call failed.
    #[error("optimizer call failed")]
    Optimizer(#[source] OE),
    /// The feasibility policy could not judge the output.
    #[error("feasibility check failed")]
    Feasibility(#[source] FE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<O, F> = Result<
    Evaluation,
    EvalError<<O as GradientOptimizer>::Error, <F as Feasibility>::Error>,
>;

/// Runs the optimizer at echo time `te` and judges the result.
///
/// The optimizer receives a copy of `base` carrying `te`; `base` itself is
/// never modified.
///
/// # Errors
///
/// Returns an error if the optimizer or the feasibility policy fails.
pub fn evaluate<O, F>(
    optimizer: &O,
    policy: &F,
    base: &SequenceParameters,
    te: f64,
) -> EvaluateResult<O, F>
where
    O: GradientOptimizer,
    F: Feasibility,
{
    let input = base.with_te(te);
    let output = optimizer.optimize(&input).map_err(EvalError::Optimizer)?;
    let verdict = policy.assess(te, &output).map_err(EvalError::Feasibility)?;

    Ok(Evaluation {
        te,
        verdict,
        snapshot: Snapshot::new(input, output),
    })
}
