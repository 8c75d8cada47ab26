use std::error::Error as StdError;

use gradte_core::ParamsError;
use thiserror::Error;

use crate::{BoundsError, EvalError};

/// Errors that can occur during the minimal echo time search.
///
/// Parameter and bound errors are raised before the optimizer is called.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParamsError),

    #[error("invalid echo time bounds: {0}")]
    InvalidBounds(#[from] BoundsError),

    #[error("no feasible echo time in [{min_te}, {max_te}] ms after {iters} trials")]
    NoFeasibleSolution {
        min_te: f64,
        max_te: f64,
        iters: usize,
    },

    #[error("optimizer failed at TE = {te} ms")]
    OptimizerFailure {
        te: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("feasibility check failed at TE = {te} ms")]
    Feasibility {
        te: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    /// Wraps an evaluation failure at echo time `te`.
    pub(crate) fn from_eval<OE, FE>(te: f64, err: EvalError<OE, FE>) -> Self
    where
        OE: StdError + Send + Sync + 'static,
        FE: StdError + Send + Sync + 'static,
    {
        match err {
            EvalError::Optimizer(e) => Self::OptimizerFailure {
                te,
                source: Box::new(e),
            },
            EvalError::Feasibility(e) => Self::Feasibility {
                te,
                source: Box::new(e),
            },
        }
    }
}
