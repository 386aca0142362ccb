//! xorshift64* pseudo-random number generator.
//!
//! Based on the public-domain generator by Sebastiano Vigna (2014):
//! - 64-bit output, single 64-bit word of state
//! - passes Dieharder and SmallCrush
//! - no warm-up needed
//! - period 2^64 - 1 over nonzero states
//!
//! Hash keys must be identical from run to run, so the generator is fully
//! deterministic: the same seed always yields the same stream. It is not
//! synchronized; every consumer owns its own instance.

use rand::{RngCore, SeedableRng};

/// Output multiplier of xorshift64*.
const MULTIPLIER: u64 = 2_685_821_657_736_338_717;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prng {
    s: u64,
}

impl Prng {
    /// Create a generator seeded with `seed`.
    ///
    /// A zero seed is accepted but produces only zeros; callers pick a
    /// well-distributed nonzero seed.
    pub const fn new(seed: u64) -> Self {
        Self { s: seed }
    }

    /// Reseed in place.
    pub fn init(&mut self, seed: u64) {
        self.s = seed;
    }

    /// Current internal state (the last xorshifted word, before scrambling).
    pub const fn state(&self) -> u64 {
        self.s
    }

    /// Advance the state and return the next scrambled output.
    ///
    /// `const` so key tables can be generated at compile time.
    #[inline]
    pub const fn rand(&mut self) -> u64 {
        let mut s = self.s;
        s ^= s >> 12;
        s ^= s << 25;
        s ^= s >> 27;
        self.s = s;
        s.wrapping_mul(MULTIPLIER)
    }

    /// AND of three draws: on average only 8 bits set.
    ///
    /// Used where keys with low Hamming weight are wanted (magic-number
    /// search, sparse feature hashing).
    #[inline]
    pub const fn sparse_rand(&mut self) -> u64 {
        let r1 = self.rand();
        let r2 = self.rand();
        let r3 = self.rand();
        r1 & r2 & r3
    }
}

impl RngCore for Prng {
    fn next_u32(&mut self) -> u32 {
        // High bits of xorshift* output are the strongest
        (self.rand() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.rand()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let word = self.rand().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Prng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
#[path = "prng_tests.rs"]
mod prng_tests;
