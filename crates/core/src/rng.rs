//! RNG module - injectable random sources for piece spawning
//!
//! Spawning never reaches for a global generator. Callers hand in something
//! implementing [`RandomSource`]:
//!
//! - a closure `FnMut() -> f64` returning a uniform value in `[0, 1)`;
//! - [`SimpleRng`], a seeded LCG for reproducible games and tests;
//! - [`RandSource`], wrapping any `rand` generator.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Current state, usable as the seed of an identical generator
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_unit(&mut self) -> f64 {
        // The high bits of an LCG are the well-mixed ones.
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

/// Adapter from a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandSource<R>(pub R);

impl RandSource<ThreadRng> {
    /// The process-local thread generator
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RandSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RandSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}
