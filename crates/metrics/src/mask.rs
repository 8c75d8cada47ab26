use gradte_core::SampleInterval;

/// Sign pattern of a waveform split by a 180° refocusing pulse.
///
/// Samples before the refocusing index carry `+1`, samples from it onward
/// carry `-1`, so the two diffusion lobes contribute with opposite sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefocusingMask {
    len: usize,
    t_inv: usize,
}

impl RefocusingMask {
    /// Builds the mask for an `n`-sample waveform with echo time `te` (ms).
    ///
    /// The refocusing index is `floor(te / dt / 1000 / 2)`, clamped to `n`.
    #[must_use]
    pub fn new(n: usize, dt: SampleInterval, te: f64) -> Self {
        let t_inv = (te / dt.seconds() / 1.0e3 / 2.0).floor();
        // Saturating cast; negative or NaN maps to 0.
        let t_inv = (t_inv as usize).min(n);
        Self { len: n, t_inv }
    }

    /// A mask without refocusing: every sample keeps a positive sign.
    #[must_use]
    pub fn none(n: usize) -> Self {
        Self { len: n, t_inv: n }
    }

    /// Index of the first inverted sample.
    #[must_use]
    pub fn inversion_index(&self) -> usize {
        self.t_inv
    }

    /// Number of samples covered by the mask.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sign applied to sample `i`.
    #[must_use]
    pub fn sign(&self, i: usize) -> f64 {
        if i < self.t_inv { 1.0 } else { -1.0 }
    }

    /// Iterates over the signs of all samples.
    pub fn signs(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.sign(i))
    }
}
