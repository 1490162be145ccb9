//! Clamped resource pools.

use serde::{Deserialize, Serialize};

/// A current/max resource pool with the invariant `0 <= current <= max`.
///
/// Mutations clamp rather than reject: a delta that would push the pool out
/// of range silently lands on the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMeter {
    current: u32,
    max: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` into `[0, max]`.
    pub fn new(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    /// Creates a full meter.
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Applies a signed delta, clamping the result into `[0, max]`.
    pub fn apply(&mut self, delta: i64) {
        let next = i64::from(self.current).saturating_add(delta);
        self.current = next.clamp(0, i64::from(self.max)) as u32;
    }
}

/// Clamp a pool value into `[0, max]` after applying a signed delta.
///
/// Shared by character resources, whose maxima are derived from stats rather
/// than stored in a meter.
pub fn clamped(current: u32, delta: i64, max: u32) -> u32 {
    i64::from(current)
        .saturating_add(delta)
        .clamp(0, i64::from(max)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_current_to_max() {
        let meter = ResourceMeter::new(150, 100);
        assert_eq!(meter.current(), 100);
        assert_eq!(meter.max(), 100);
    }

    #[test]
    fn apply_clamps_both_ends() {
        let mut meter = ResourceMeter::new(50, 100);
        meter.apply(-200);
        assert_eq!(meter.current(), 0);
        assert!(meter.is_empty());
        meter.apply(i64::MAX);
        assert_eq!(meter.current(), 100);
    }

    #[test]
    fn clamped_absorbs_out_of_range_deltas() {
        assert_eq!(clamped(10, -25, 100), 0);
        assert_eq!(clamped(90, 25, 100), 100);
        assert_eq!(clamped(40, 5, 100), 45);
    }
}
