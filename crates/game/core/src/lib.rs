//! Deterministic progression and combat-resolution rules.
//!
//! `game-core` owns the canonical game rules: character progression, gacha
//! draws, turn resolution, and the PvP duel state machine. Everything here is
//! pure and synchronous — external collaborators (the narrative judge, asset
//! synthesis, PvP arbitration) live behind the runtime's ports, and their
//! output reaches this crate only as already-sanitized [`JudgeVerdict`] /
//! [`DuelVerdict`] values. State flows in as a [`SessionState`] and flows out
//! as a new value; nothing in this crate mutates caller state in place.
pub mod config;
pub mod duel;
pub mod engine;
pub mod env;
pub mod error;
pub mod gacha;
pub mod judgement;
pub mod progression;
pub mod state;

pub use config::GameConfig;
pub use duel::{DuelPhase, DuelState, DuelVerdict, DuelWinner};
pub use engine::{TurnKind, TurnOutcome, resolve_turn};
pub use env::{PcgRng, RngOracle, compute_seed};
pub use error::{DuelError, GachaError};
pub use gacha::{GachaDraw, TechniqueCatalog, TechniqueEntry, spin};
pub use judgement::{ActionEvaluation, EvaluationStatus, JudgeVerdict};
pub use progression::{LevelUp, StatDeltas, apply_delta};
pub use state::{
    Ability, AbilityKind, Character, CoreStats, EnemyState, Equipment, FeedMessage, Grade,
    ImageRef, Item, NarratorMessage, Origin, Rarity, ResourceMeter, SessionState, Slot, SourceRef,
    StatBonus, Technique, WorldState,
};
