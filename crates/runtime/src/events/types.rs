//! Typed events carried by the bus.

use serde::{Deserialize, Serialize};

use game_core::{DuelWinner, FeedMessage, Rarity};

/// Narrative feed updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FeedEvent {
    /// A message was committed to the session feed.
    MessageAppended { message: FeedMessage },
    /// The judge failed; this narration was shown but nothing was committed.
    FallbackNarration { message: FeedMessage },
}

/// Duel lifecycle updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DuelEvent {
    Started {
        room: String,
        opponent: String,
    },
    TurnResolved {
        room: String,
        message: FeedMessage,
    },
    ArbitrationFailed {
        room: String,
    },
    Resolved {
        room: String,
        winner: DuelWinner,
    },
}

/// Out-of-band session notices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SystemEvent {
    BossEventTriggered,
    BossRewardGranted { spins: u32 },
    DailyReset,
    TechniqueAwakened { name: String, rarity: Rarity },
    LevelUp { new_level: u32 },
    Defeated,
}
