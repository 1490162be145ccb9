//! Deterministic random number generation.
//!
//! All randomness in the rules (gacha tier rolls, in-tier picks, boss reward
//! spins) flows through [`RngOracle`]. Implementations must be deterministic:
//! given the same seed they must produce the same value, which keeps gacha
//! outcomes and reward rolls reproducible under test and across replays.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Percentage roll in [0, 100) with two decimal digits of resolution.
    ///
    /// Used for the gacha rarity bands, which are defined over [0, 100).
    fn roll_percent(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed) % 10_000) / 100.0
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32(seed) % span)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Stateless — the caller owns
/// the seed, so the same (seed) input always yields the same output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the LCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed from session entropy sources.
///
/// # Arguments
///
/// * `game_seed` - Base seed fixed at session creation
/// * `nonce` - Turn sequence number (increments once per resolved turn)
/// * `context` - Distinguishes independent rolls within the same turn
///   (0 = primary roll, 1 = secondary, ...)
pub fn compute_seed(game_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64/FxHash-style mixing constants
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
