//! Async host for the progression and combat rules.
//!
//! The runtime owns the mutable [`game_core::SessionState`] behind a worker
//! task, arbitrates turns through pluggable external collaborators (narrative
//! judge, asset synthesis, PvP arbitration), schedules recurring world
//! events, and persists snapshots after every committed turn. Clients hold a
//! cloneable [`SessionHandle`] and observe changes over the topic event bus.

pub mod api;
pub mod duel;
pub mod events;
pub mod repository;
pub mod scheduler;
pub mod session;

pub use api::{
    AssetSynthesizer, MockOpponentSource, NarrativeJudge, OpponentPolicy, OpponentSource,
    PvpArbiter, RandomLinePolicy, RawActionEvaluation, RawDuelVerdict, RawEnemyUpdate,
    RawJudgeResponse, RawSource, RepositoryError, Result, RuntimeError, sanitize_duel_verdict,
    sanitize_judge_response,
};
pub use duel::DuelCoordinator;
pub use events::{DuelEvent, Event, EventBus, FeedEvent, SystemEvent, Topic};
pub use repository::{FileSnapshotRepository, InMemorySnapshotRepository, SnapshotRepository};
pub use scheduler::{BOSS_EVENT_ACTION, SchedulerConfig, WorldEventScheduler};
pub use session::{
    FALLBACK_NARRATIVE, Session, SessionBuilder, SessionConfig, SessionHandle, TurnReport,
};
