use std::convert::Infallible;

use gradte_core::{OptimizerOutput, ParamsError, SequenceMode, SequenceParameters, TimingError};
use gradte_metrics::b_value;

/// Outcome of a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The trial meets the search target; shorter echo times are tried next.
    Feasible,
    /// The trial misses the target; longer echo times are tried next.
    Infeasible,
}

impl Verdict {
    /// Maps `true` to [`Verdict::Feasible`].
    #[must_use]
    pub fn from_bool(feasible: bool) -> Self {
        if feasible {
            Self::Feasible
        } else {
            Self::Infeasible
        }
    }

    #[must_use]
    pub fn is_feasible(self) -> bool {
        self == Self::Feasible
    }
}

/// Decides whether an optimizer result at a trial echo time is feasible.
pub trait Feasibility {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Assesses the optimizer output produced at echo time `te` (ms).
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the verdict cannot be computed.
    fn assess(&self, te: f64, output: &OptimizerOutput) -> Result<Verdict, Self::Error>;
}

/// Feasible when the waveform reaches a target b-value.
///
/// Note the direction: hardware limits are not consulted, only whether the
/// diffusion weighting is strong enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBValue {
    target: f64,
    t_readout: f64,
}

impl TargetBValue {
    /// Creates a policy for `target` (s/mm²) with readout time `t_readout` (ms).
    #[must_use]
    pub fn new(target: f64, t_readout: f64) -> Self {
        Self { target, t_readout }
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Feasibility for TargetBValue {
    type Error = TimingError;

    fn assess(&self, te: f64, output: &OptimizerOutput) -> Result<Verdict, Self::Error> {
        let bval = b_value(&output.waveform, te, self.t_readout)?;
        Ok(Verdict::from_bool(bval >= self.target))
    }
}

/// Feasible when the optimizer reports no violated constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WithinLimits;

impl Feasibility for WithinLimits {
    type Error = Infallible;

    fn assess(&self, _te: f64, output: &OptimizerOutput) -> Result<Verdict, Self::Error> {
        Ok(Verdict::from_bool(!output.diagnostics.constraint_violated()))
    }
}

/// The policy implied by a sequence mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeFeasibility {
    Diffusion(TargetBValue),
    Free(WithinLimits),
}

impl ModeFeasibility {
    /// Selects [`TargetBValue`] for diffusion modes and [`WithinLimits`] for
    /// free mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode is unknown or a diffusion record has no
    /// readout time.
    pub fn for_params(
        params: &SequenceParameters,
        target_bvalue: f64,
    ) -> Result<Self, ParamsError> {
        Ok(match params.mode()? {
            SequenceMode::Diffusion => {
                Self::Diffusion(TargetBValue::new(target_bvalue, params.readout_time()?))
            }
            SequenceMode::Free => Self::Free(WithinLimits),
        })
    }
}

impl Feasibility for ModeFeasibility {
    type Error = TimingError;

    fn assess(&self, te: f64, output: &OptimizerOutput) -> Result<Verdict, Self::Error> {
        match self {
            Self::Diffusion(policy) => policy.assess(te, output),
            Self::Free(policy) => match policy.assess(te, output) {
                Ok(verdict) => Ok(verdict),
                Err(never) => match never {},
            },
        }
    }
}
