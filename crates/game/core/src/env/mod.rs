//! Injected environment abstractions for the pure rules.
//!
//! The only environmental dependency the rules have is randomness; it is
//! isolated behind [`RngOracle`] so every roll is reproducible under test.
mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};
