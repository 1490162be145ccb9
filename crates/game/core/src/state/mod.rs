//! Canonical session state representation.
//!
//! This module owns the data structures describing the player character, the
//! active adversary, the shared world timeline, and the narrative feed. The
//! runtime clones or queries this state but mutates it exclusively through
//! the operations in [`crate::engine`], [`crate::gacha`], and [`crate::duel`].
mod ability;
mod character;
mod enemy;
mod grade;
mod item;
mod meter;
mod message;
mod world;

use serde::{Deserialize, Serialize};

pub use ability::{Ability, AbilityKind};
pub use character::{Character, CoreStats, Technique};
pub use enemy::EnemyState;
pub use grade::{Grade, Origin};
pub use item::{Equipment, Item, Rarity, Slot, StatBonus};
pub use message::{FeedMessage, ImageRef, NarratorMessage, SourceRef};
pub use meter::{ResourceMeter, clamped};
pub use world::WorldState;

/// The explicit session context threaded through every engine operation.
///
/// Owned by the hosting application; the engine is stateless between calls.
/// This is also the serializable snapshot an external persistence layer may
/// store and restore verbatim between sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Base RNG seed, fixed at session creation.
    pub game_seed: u64,
    /// Turn sequence number; increments once per resolved turn. Combined
    /// with `game_seed` to derive per-roll seeds.
    pub nonce: u64,
    pub character: Character,
    /// The active adversary, if an encounter is in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enemy: Option<EnemyState>,
    pub world: WorldState,
    /// Narrative feed, oldest first.
    #[serde(default)]
    pub history: Vec<FeedMessage>,
}

impl SessionState {
    pub fn new(game_seed: u64, character: Character, world: WorldState) -> Self {
        Self {
            game_seed,
            nonce: 0,
            character,
            enemy: None,
            world,
            history: Vec::new(),
        }
    }

    /// The most recent `window` feed messages, oldest first.
    pub fn recent_history(&self, window: usize) -> &[FeedMessage] {
        let start = self.history.len().saturating_sub(window);
        &self.history[start..]
    }
}
