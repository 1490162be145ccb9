//! Turn resolution.
//!
//! [`resolve_turn`] is the authoritative reducer for [`SessionState`]: it
//! consumes one sanitized judge verdict against the current session and
//! produces a new consistent state plus derived events (level-up, boss
//! reward, defeat). It is pure — the runtime owns the suspension points
//! (judge call, asset rendering) and commits the returned state atomically.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::env::{RngOracle, compute_seed};
use crate::judgement::JudgeVerdict;
use crate::progression::{LevelUp, StatDeltas, apply_delta};
use crate::state::{FeedMessage, ImageRef, NarratorMessage, SessionState};

/// Seed context for the boss reward spin roll.
const SEED_BOSS_REWARD: u32 = 0;

/// Who originated the turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnKind {
    /// A free-form action declared by the player.
    Player { action: String },
    /// A system-originated event synthesized by the world scheduler.
    WorldEvent { label: String },
}

impl TurnKind {
    /// The action text handed to the narrative judge.
    pub fn action_text(&self) -> &str {
        match self {
            TurnKind::Player { action } => action,
            TurnKind::WorldEvent { label } => label,
        }
    }
}

/// Result of resolving one turn.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnOutcome {
    /// The next session state. The narrator message is not yet part of its
    /// history; call [`TurnOutcome::finalize`] once presentation payloads
    /// (scene image) are attached.
    pub session: SessionState,
    pub level_up: Option<LevelUp>,
    /// Bonus spins granted for beating the world boss, if this turn did.
    pub boss_reward: Option<u32>,
    /// The character's HP reached zero this turn.
    pub defeated: bool,
    /// The narrator feed entry for this turn.
    pub message: NarratorMessage,
}

impl TurnOutcome {
    /// Attaches a rendered scene image to the narrator message.
    pub fn attach_image(&mut self, image: ImageRef) {
        self.message.image = Some(image);
    }

    /// Appends the narrator message to the session history and returns the
    /// committed state together with the feed entry.
    pub fn finalize(mut self) -> (SessionState, FeedMessage) {
        let message = FeedMessage::Narrator(self.message);
        self.session.history.push(message.clone());
        (self.session, message)
    }
}

/// Applies one arbitrated outcome to the session.
///
/// 1. A verdict without a structured evaluation leaves character and enemy
///    untouched; only the narrative lands in the feed.
/// 2. Otherwise the evaluation's costs (qi, stamina) and the verdict's net
///    `hp_change`/`xp_gain` are applied through the clamping delta path,
///    along with any `hp_recovered` and status tag.
/// 3. An `enemy_update` replaces the active adversary wholesale; a hit with
///    no update clears it (encounter resolved).
/// 4. A world-event turn that resolves as a hit with no adversary left
///    grants 2–5 bonus spins and marks the daily boss beaten.
pub fn resolve_turn(
    session: &SessionState,
    turn: &TurnKind,
    verdict: &JudgeVerdict,
    rng: &dyn RngOracle,
) -> TurnOutcome {
    let mut next = session.clone();
    next.nonce += 1;

    if let TurnKind::Player { action } = turn {
        next.history.push(FeedMessage::player(action.clone()));
    }

    let mut level_up = None;
    let mut boss_reward = None;

    if let Some(eval) = &verdict.evaluation {
        let deltas = StatDeltas {
            hp: verdict.hp_change.saturating_add(clamp_to_i32(eval.hp_recovered)),
            qi: -clamp_to_i32(eval.qi_cost),
            stamina: -clamp_to_i32(eval.stamina_cost),
            xp: verdict.xp_gain,
        };
        let (mut character, lu) = apply_delta(&next.character, deltas);
        level_up = lu;

        if let Some(tag) = &eval.status_effect {
            character.add_status(tag);
        }

        if let Some(enemy) = &eval.enemy_update {
            next.enemy = Some(enemy.clone());
        } else if eval.status.is_hit() {
            next.enemy = None;
        }

        if matches!(turn, TurnKind::WorldEvent { .. })
            && eval.status.is_hit()
            && next.enemy.is_none()
        {
            let seed = compute_seed(next.game_seed, next.nonce, SEED_BOSS_REWARD);
            let bonus = rng.range(
                seed,
                GameConfig::BOSS_REWARD_SPINS_MIN,
                GameConfig::BOSS_REWARD_SPINS_MAX,
            );
            character.spins += bonus;
            next.world.daily_boss_beaten = true;
            boss_reward = Some(bonus);
        }

        next.character = character;
    }

    let defeated = next.character.is_defeated();
    let message = NarratorMessage {
        narrative: verdict.narrative.clone(),
        image: None,
        kokusen: verdict.kokusen,
        evaluation: verdict.evaluation.clone(),
        xp_gain: verdict.xp_gain,
        sources: verdict.sources.clone(),
    };

    TurnOutcome {
        session: next,
        level_up,
        boss_reward,
        defeated,
        message,
    }
}

fn clamp_to_i32(value: u32) -> i32 {
    value.min(i32::MAX as u32) as i32
}
