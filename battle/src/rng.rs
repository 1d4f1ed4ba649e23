//! Deterministic RNG for match resolution
//!
//! Every random decision the engine makes (priority tie-breaks, random target
//! selection) goes through [`BattleRng`], so a match replays identically from
//! the same seed and tests can pin outcomes.

/// Trait for random number generation in matches
pub trait BattleRng {
    /// Generate a random u32
    fn next_u32(&mut self) -> u32;

    /// Generate a random number in range [0, max)
    fn gen_range(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        (self.next_u32() as usize) % max
    }

    /// Fair coin flip
    fn gen_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }

    /// Shuffle a slice using Fisher-Yates algorithm
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_range(i + 1);
            slice.swap(i, j);
        }
    }
}

/// XorShift32 RNG - simple, fast, deterministic
///
/// Not suitable for anything that needs cryptographic quality.
#[derive(Debug, Clone)]
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    /// Create a new RNG from a u64 seed
    ///
    /// Both halves of the seed are folded into the state, which is never 0.
    pub fn seed_from_u64(seed: u64) -> Self {
        let state = ((seed as u32) ^ ((seed >> 32) as u32)).max(1);
        Self { state }
    }

    pub fn seed_from_u32(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }
}

impl BattleRng for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
