//! Public runtime API: errors, ports, and stock port implementations.

pub mod defaults;
pub mod errors;
pub mod ports;

pub use defaults::{MockOpponentSource, RandomLinePolicy};
pub use errors::{RepositoryError, Result, RuntimeError};
pub use ports::{
    AssetSynthesizer, NarrativeJudge, OpponentPolicy, OpponentSource, PvpArbiter,
    RawActionEvaluation, RawDuelVerdict, RawEnemyUpdate, RawJudgeResponse, RawSource,
    sanitize_duel_verdict, sanitize_judge_response,
};
