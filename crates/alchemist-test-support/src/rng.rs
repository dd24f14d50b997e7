//! Test RNG: deterministic `DeterministicRng` implementations for tests.

use alchemist_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` for `next_u32_range` and `0.0` for
/// `next_f64`. Suitable for tests that do not depend on specific random values.
///
/// Note that `0.0` is below every probability threshold, so any chance-based
/// branch driven by this RNG fires.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that returns values from predetermined sequences: one for integer
/// draws and one for fractional draws. Panics if a sequence is exhausted.
/// Used in tests that need specific, repeatable random outcomes (dice rolls,
/// pool picks, downgrade draws).
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
    fractions: Vec<f64>,
    fraction_index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given integer values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            index: 0,
            fractions: Vec::new(),
            fraction_index: 0,
        }
    }

    /// Sets the values returned by `next_f64`, in order.
    #[must_use]
    pub fn with_fractions(mut self, fractions: Vec<f64>) -> Self {
        self.fractions = fractions;
        self.fraction_index = 0;
        self
    }

    /// Number of integer draws made so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }

    fn next_f64(&mut self) -> f64 {
        let val = self.fractions[self.fraction_index];
        self.fraction_index += 1;
        val
    }
}
