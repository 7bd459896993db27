//! mulberry32 pseudo-random number generator
//!
//! A tiny 32-bit generator with a single word of state. It is not a
//! statistically strong PRNG, but it is cheap and its output is bit-exact
//! across platforms, which is all the digest needs: the daily shuffle and
//! tag colours must be reproducible for every reader on every machine.
//!
//! # Determinism
//!
//! Same seed → same infinite sequence. Every caller constructs its own
//! generator; there is no shared or global instance.

/// Increment added to the state on every draw.
const GOLDEN_GAMMA: u32 = 0x6D2B_79F5;

/// 2^32 as a float, the divisor that maps a `u32` into `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Deterministic mulberry32 generator.
///
/// # Example
/// ```
/// use daily_digest::prng::Mulberry32;
///
/// let mut rng = Mulberry32::new(0);
/// assert_eq!(rng.next_u32(), 1144304738);
/// let x = rng.next_f64();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from a 32-bit seed. Zero is a valid seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current internal state. Feeding it back into [`Mulberry32::new`]
    /// resumes the sequence at the same point.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the state and return the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0.0, 1.0)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Uniform index in `0..bound` computed as `floor(next_f64() * bound)`.
    ///
    /// `bound` must be non-zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "bound must be positive");
        let j = (self.next_f64() * bound as f64).floor() as usize;
        // f64 rounding can never reach `bound` for bounds below 2^32,
        // but keep the index in range for larger slices.
        j.min(bound.saturating_sub(1))
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Closure form of the generator: each call yields the next value in `[0, 1)`.
///
/// ```
/// let mut next = daily_digest::prng::generator(20240615);
/// assert_eq!(next(), 0.2716714192647487);
/// ```
pub fn generator(seed: u32) -> impl FnMut() -> f64 {
    let mut rng = Mulberry32::new(seed);
    move || rng.next_f64()
}
