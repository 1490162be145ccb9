//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, repositories, and external
//! collaborators so clients can bubble them up with consistent context.

use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{DuelError, GachaError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("a turn is already being resolved")]
    TurnInFlight,

    #[error("action text must not be empty")]
    EmptyAction,

    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Gacha(#[from] GachaError),

    #[error(transparent)]
    Duel(#[from] DuelError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("judge returned an unusable verdict: {0}")]
    InvalidVerdict(String),

    #[error("opponent lookup failed for room {room}: {reason}")]
    OpponentUnavailable { room: String, reason: String },

    #[error("duel arbitration failed: {0}")]
    ArbitrationFailed(String),

    #[error("session requires a narrative judge before building")]
    MissingJudge,

    #[error("session requires an initial state or a resumable snapshot")]
    MissingState,
}
