use thiserror::Error;

/// Index of the "constraint violated" flag in a [`DiagnosticVector`].
pub const CONSTRAINT_VIOLATED_INDEX: usize = 14;

/// Errors that can occur when constructing a [`DiagnosticVector`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticsError {
    #[error(
        "diagnostic vector has {len} entries, expected at least {}",
        CONSTRAINT_VIOLATED_INDEX + 1
    )]
    TooShort { len: usize },
}

/// Fixed-layout diagnostics reported by the optimizer alongside a waveform.
///
/// Only the constraint flag at [`CONSTRAINT_VIOLATED_INDEX`] is interpreted;
/// all other entries are carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticVector(Vec<f64>);

impl DiagnosticVector {
    /// Wraps the raw diagnostics of an optimizer call.
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticsError::TooShort`] if the constraint flag is missing.
    pub fn new(values: Vec<f64>) -> Result<Self, DiagnosticsError> {
        if values.len() <= CONSTRAINT_VIOLATED_INDEX {
            return Err(DiagnosticsError::TooShort { len: values.len() });
        }
        Ok(Self(values))
    }

    /// Returns `true` if some hardware or physics limit was exceeded.
    #[must_use]
    pub fn constraint_violated(&self) -> bool {
        self.0[CONSTRAINT_VIOLATED_INDEX] != 0.0
    }

    /// Returns the raw diagnostic values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.0
    }
}
