//! Round-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! One `RoundRng` is created per round and threaded by `&mut` through every
//! randomized decision: terrain elevation first, then endpoint sampling in
//! ascending `UnitId` order.  The same seed and configuration therefore always
//! produce the same grid, the same endpoints, and (since search and
//! deconfliction are deterministic) the same routes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Single-threaded RNG owned by the round orchestrator.
pub struct RoundRng(SmallRng);

impl RoundRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        RoundRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        RoundRng(SmallRng::from_entropy())
    }

    /// Derive the seed of round `round` in a multi-round session so that
    /// replaying a session seed replays every round.
    pub fn round_seed(session_seed: u64, round: u64) -> u64 {
        session_seed ^ round.wrapping_mul(MIXING_CONSTANT)
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `percent / 100`.  `0` never fires, `100` (or
    /// more) always does.
    #[inline]
    pub fn percent_chance(&mut self, percent: u8) -> bool {
        self.0.gen_range(0u8..100) < percent
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.0.r#gen()
    }
}
