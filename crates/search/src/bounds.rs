use gradte_core::SampleInterval;
use thiserror::Error;

use crate::Verdict;

/// Errors that can occur when creating [`Bounds`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoundsError {
    /// One or both endpoints are non-finite.
    #[error("non-finite echo time bound(s) [{min_te}, {max_te}]")]
    NonFinite { min_te: f64, max_te: f64 },

    /// The lower bound is not below the upper bound.
    #[error("empty echo time range [{min_te}, {max_te}]")]
    Empty { min_te: f64, max_te: f64 },

    /// The lower bound leaves no time for the waveform.
    #[error("min_te {min_te} ms must exceed readout and pulse time {floor} ms")]
    BelowFloor { min_te: f64, floor: f64 },
}

/// The echo time range still being searched, in milliseconds.
///
/// The upper end is the smallest echo time known (or assumed) to be feasible;
/// the lower end the largest known to be infeasible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    lo: f64,
    hi: f64,
}

impl Bounds {
    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundsError`] if either endpoint is non-finite or
    /// `min_te >= max_te`.
    pub fn new(min_te: f64, max_te: f64) -> Result<Self, BoundsError> {
        if !min_te.is_finite() || !max_te.is_finite() {
            return Err(BoundsError::NonFinite { min_te, max_te });
        }
        if min_te >= max_te {
            return Err(BoundsError::Empty { min_te, max_te });
        }
        Ok(Self {
            lo: min_te,
            hi: max_te,
        })
    }

    /// Checks that the range lies strictly above `floor`.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::BelowFloor`] if `min_te <= floor`.
    pub fn above(self, floor: f64) -> Result<Self, BoundsError> {
        if self.lo <= floor {
            return Err(BoundsError::BelowFloor {
                min_te: self.lo,
                floor,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    #[must_use]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Returns the bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }

    /// Returns the range width in milliseconds.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Returns the next trial echo time.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.lo + self.width() / 2.0
    }

    /// Returns true once the width is within a quarter sample, or once the
    /// midpoint can no longer be told apart from an endpoint.
    #[must_use]
    pub fn is_converged(&self, dt: SampleInterval) -> bool {
        let mid = self.midpoint();
        self.width() * 1.0e-3 <= dt.seconds() / 4.0 || mid <= self.lo || mid >= self.hi
    }

    /// Moves the upper end down to `te` if feasible, the lower end up otherwise.
    pub(crate) fn shrink(&mut self, te: f64, verdict: Verdict) {
        match verdict {
            Verdict::Feasible => self.hi = te,
            Verdict::Infeasible => self.lo = te,
        }
    }
}
