//! Stock port implementations that need no network.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use game_core::{Character, PcgRng, RngOracle, compute_seed};
use game_content::{OPPONENT_ACTIONS, shadow_opponent};

use super::ports::{OpponentPolicy, OpponentSource};

/// Matchmaking stand-in: every room yields the player's own shadow, one
/// level ahead.
pub struct MockOpponentSource;

#[async_trait]
impl OpponentSource for MockOpponentSource {
    async fn find_opponent(&self, _room: &str, player: &Character) -> anyhow::Result<Character> {
        Ok(shadow_opponent(player))
    }
}

/// Seedable random pick over a fixed set of action lines.
pub struct RandomLinePolicy {
    lines: Vec<String>,
    seed: u64,
    counter: AtomicU64,
}

impl RandomLinePolicy {
    pub fn new(lines: Vec<String>, seed: u64) -> Self {
        Self {
            lines,
            seed,
            counter: AtomicU64::new(0),
        }
    }

    /// Policy over the canned shadow-duelist lines.
    pub fn canned(seed: u64) -> Self {
        Self::new(
            OPPONENT_ACTIONS.iter().map(|s| s.to_string()).collect(),
            seed,
        )
    }
}

impl OpponentPolicy for RandomLinePolicy {
    fn next_action(&self) -> String {
        let nonce = self.counter.fetch_add(1, Ordering::Relaxed);
        let rng = PcgRng;
        let index = rng.range(
            compute_seed(self.seed, nonce, 0),
            0,
            (self.lines.len() - 1) as u32,
        ) as usize;
        self.lines[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Origin;
    use game_content::starting_character;

    #[tokio::test]
    async fn mock_source_returns_the_shadow() {
        let player = starting_character("Yuto", Origin::Humano, "");
        let opponent = MockOpponentSource
            .find_opponent("sala-1", &player)
            .await
            .expect("opponent");
        assert_eq!(opponent.name, "Sombras de Shibuya");
        assert_eq!(opponent.level, player.level + 1);
    }

    #[test]
    fn policy_draws_from_its_lines_deterministically() {
        let a = RandomLinePolicy::canned(7);
        let b = RandomLinePolicy::canned(7);
        let lines_a: Vec<String> = (0..8).map(|_| a.next_action()).collect();
        let lines_b: Vec<String> = (0..8).map(|_| b.next_action()).collect();
        assert_eq!(lines_a, lines_b);
        assert!(
            lines_a
                .iter()
                .all(|l| OPPONENT_ACTIONS.contains(&l.as_str()))
        );
    }
}
