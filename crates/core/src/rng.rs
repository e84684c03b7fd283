//! RNG module - seedable random source for tile spawning
//!
//! The board never calls a global RNG. Every spawn draws from a
//! [`RandomSource`] passed in by the caller, so games replay exactly from a
//! seed and tests can script the outcome of each draw.

/// Uniform random source used by the spawner.
pub trait RandomSource {
    /// Next 64 uniformly distributed bits.
    fn next_u64(&mut self) -> u64;

    /// Uniform value in `[0, bound)`.
    ///
    /// Uses the high half of a 64x64 multiply so the result depends on the
    /// strongest bits of the generator.
    fn next_below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "next_below requires a nonzero bound");
        ((self.next_u64() as u128 * bound as u128) >> 64) as u64
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// SplitMix64 generator
///
/// Small, fast and statistically solid enough for picking cells.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Current internal state (feeds the seed of the next game on restart)
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
