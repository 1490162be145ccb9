//! Asynchronous ports for the external generative collaborators.
//!
//! Everything the session cannot compute itself arrives through these traits:
//! narrative judgement, scene and portrait rendering, PvP arbitration, and
//! opponent matchmaking. Implementations wrap network services; the raw DTOs
//! they return are untrusted and pass through [`sanitize_judge_response`] /
//! [`sanitize_duel_verdict`] before any game state is touched.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use game_core::{
    ActionEvaluation, Character, DuelVerdict, DuelWinner, EnemyState, EvaluationStatus,
    FeedMessage, Grade, ImageRef, JudgeVerdict, ResourceMeter, SourceRef, WorldState,
};

use super::errors::RuntimeError;

/// Arbitrates free-form player actions into narrative verdicts.
///
/// A failed call must leave the session untouched; the worker falls back to a
/// canned narration instead of committing anything.
#[async_trait]
pub trait NarrativeJudge: Send + Sync {
    async fn judge(
        &self,
        character: &Character,
        history: &[FeedMessage],
        action: &str,
        world: &WorldState,
    ) -> anyhow::Result<RawJudgeResponse>;
}

/// Best-effort image rendering. An absent result is not an error: turns and
/// characters are complete without their illustrations.
#[async_trait]
pub trait AssetSynthesizer: Send + Sync {
    async fn render_scene(&self, prompt: &str) -> Option<ImageRef>;
    async fn render_portrait(&self, name: &str, appearance: &str) -> Option<ImageRef>;
}

/// Arbitrates one PvP exchange between two combatants.
#[async_trait]
pub trait PvpArbiter: Send + Sync {
    async fn arbitrate(
        &self,
        player: &Character,
        opponent: &Character,
        player_action: &str,
        opponent_action: &str,
    ) -> anyhow::Result<RawDuelVerdict>;
}

/// Finds a duel opponent for a room.
#[async_trait]
pub trait OpponentSource: Send + Sync {
    async fn find_opponent(&self, room: &str, player: &Character) -> anyhow::Result<Character>;
}

/// Picks the adversary's action line for one duel exchange.
pub trait OpponentPolicy: Send + Sync {
    fn next_action(&self) -> String;
}

/// Raw judge payload as it comes off the wire. Every field is optional or
/// unchecked; nothing here reaches game state without sanitization.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawJudgeResponse {
    pub narrative: String,
    pub image_prompt: Option<String>,
    pub action_evaluation: Option<RawActionEvaluation>,
    pub kokusen: Option<bool>,
    pub xp_gain: Option<i64>,
    pub hp_change: Option<i64>,
    pub sources: Vec<RawSource>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawActionEvaluation {
    pub status: String,
    pub reason: Option<String>,
    pub damage_dealt: Option<i64>,
    pub qi_cost: Option<i64>,
    pub stamina_cost: Option<i64>,
    pub status_effect: Option<String>,
    pub hp_recovered: Option<i64>,
    pub enemy_update: Option<RawEnemyUpdate>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawEnemyUpdate {
    pub name: String,
    pub grade: Option<String>,
    pub current_hp: Option<i64>,
    pub max_hp: Option<i64>,
    pub current_qi: Option<i64>,
    pub max_qi: Option<i64>,
    pub current_stamina: Option<i64>,
    pub max_stamina: Option<i64>,
    pub status_effects: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawSource {
    pub title: Option<String>,
    pub uri: Option<String>,
}

/// Raw PvP arbitration payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawDuelVerdict {
    pub narrative: String,
    pub kokusen: Option<bool>,
    pub p1_damage: Option<i64>,
    pub p1_qi_cost: Option<i64>,
    /// "P1" or "P2"; anything else means the duel continues.
    pub winner: Option<String>,
}

/// Validates a raw judge response into a [`JudgeVerdict`].
///
/// An empty narrative or an unrecognized evaluation status rejects the whole
/// payload; negative costs and recoveries clamp to zero.
pub fn sanitize_judge_response(raw: RawJudgeResponse) -> Result<JudgeVerdict, RuntimeError> {
    if raw.narrative.trim().is_empty() {
        return Err(RuntimeError::InvalidVerdict("empty narrative".into()));
    }

    let evaluation = raw
        .action_evaluation
        .map(sanitize_evaluation)
        .transpose()?;

    Ok(JudgeVerdict {
        narrative: raw.narrative,
        image_prompt: raw.image_prompt.filter(|p| !p.trim().is_empty()),
        evaluation,
        kokusen: raw.kokusen.unwrap_or(false),
        xp_gain: clamp_i32(raw.xp_gain),
        hp_change: clamp_i32(raw.hp_change),
        sources: raw
            .sources
            .into_iter()
            .filter_map(|s| match (s.title, s.uri) {
                (Some(title), Some(uri)) => Some(SourceRef { title, uri }),
                _ => None,
            })
            .collect(),
    })
}

fn sanitize_evaluation(raw: RawActionEvaluation) -> Result<ActionEvaluation, RuntimeError> {
    let status: EvaluationStatus = raw
        .status
        .parse()
        .map_err(|_| RuntimeError::InvalidVerdict(format!("unknown status {:?}", raw.status)))?;

    Ok(ActionEvaluation {
        status,
        reason: raw.reason.unwrap_or_default(),
        damage_dealt: clamp_u32(raw.damage_dealt),
        qi_cost: clamp_u32(raw.qi_cost),
        stamina_cost: clamp_u32(raw.stamina_cost),
        status_effect: raw.status_effect.filter(|s| !s.trim().is_empty()),
        hp_recovered: clamp_u32(raw.hp_recovered),
        enemy_update: raw.enemy_update.map(sanitize_enemy),
    })
}

fn sanitize_enemy(raw: RawEnemyUpdate) -> EnemyState {
    // Unknown grades degrade to the weakest tier rather than rejecting the
    // whole verdict; the judge often improvises enemy labels.
    let grade = raw
        .grade
        .as_deref()
        .and_then(|g| g.parse::<Grade>().ok())
        .unwrap_or(Grade::WEAKEST);

    EnemyState {
        name: raw.name,
        grade,
        hp: meter(raw.current_hp, raw.max_hp, 100),
        qi: meter(raw.current_qi, raw.max_qi, 100),
        stamina: meter(raw.current_stamina, raw.max_stamina, 100),
        status_effects: raw.status_effects,
    }
}

fn meter(current: Option<i64>, max: Option<i64>, default_max: u32) -> ResourceMeter {
    let max = max.map(clamp_meter).filter(|&m| m > 0).unwrap_or(default_max);
    let current = current.map(clamp_meter).unwrap_or(max);
    ResourceMeter::new(current, max)
}

/// Validates a raw arbitration payload into a [`DuelVerdict`].
pub fn sanitize_duel_verdict(raw: RawDuelVerdict) -> Result<DuelVerdict, RuntimeError> {
    if raw.narrative.trim().is_empty() {
        return Err(RuntimeError::InvalidVerdict("empty duel narrative".into()));
    }

    let winner = match raw.winner.as_deref() {
        Some("P1") => Some(DuelWinner::Player),
        Some("P2") => Some(DuelWinner::Opponent),
        _ => None,
    };

    Ok(DuelVerdict {
        narrative: raw.narrative,
        kokusen: raw.kokusen.unwrap_or(false),
        p1_damage: clamp_u32(raw.p1_damage),
        p1_qi_cost: clamp_u32(raw.p1_qi_cost),
        winner,
    })
}

fn clamp_u32(value: Option<i64>) -> u32 {
    value.unwrap_or(0).clamp(0, u32::MAX as i64) as u32
}

fn clamp_i32(value: Option<i64>) -> i32 {
    value.unwrap_or(0).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

fn clamp_meter(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}
