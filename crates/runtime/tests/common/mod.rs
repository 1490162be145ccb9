//! Shared fixtures: scripted ports and session builders.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use game_core::{Character, FeedMessage, ImageRef, Origin, SessionState, WorldState};
use game_content::{starting_character, starting_world};
use runtime::{
    AssetSynthesizer, NarrativeJudge, PvpArbiter, RawActionEvaluation, RawDuelVerdict,
    RawJudgeResponse,
};

/// Opt-in log capture: `RUST_LOG=runtime=debug cargo test -- --nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn test_state(game_seed: u64) -> SessionState {
    SessionState::new(
        game_seed,
        starting_character("Yuto", Origin::Humano, "Uniforme escolar, cabelo branco"),
        starting_world(),
    )
}

/// Judge that replays a queue of canned responses.
pub struct ScriptedJudge {
    responses: Mutex<VecDeque<anyhow::Result<RawJudgeResponse>>>,
}

impl ScriptedJudge {
    pub fn new(responses: Vec<anyhow::Result<RawJudgeResponse>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }

    pub fn single(response: RawJudgeResponse) -> Self {
        Self::new(vec![Ok(response)])
    }

    pub fn failing() -> Self {
        Self::new(vec![Err(anyhow::anyhow!("judge unreachable"))])
    }
}

#[async_trait]
impl NarrativeJudge for ScriptedJudge {
    async fn judge(
        &self,
        _character: &Character,
        _history: &[FeedMessage],
        _action: &str,
        _world: &WorldState,
    ) -> anyhow::Result<RawJudgeResponse> {
        self.responses
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("judge script exhausted")))
    }
}

/// Judge that parks until the test releases it, for in-flight assertions.
pub struct BlockingJudge {
    pub release: Arc<Notify>,
    response: RawJudgeResponse,
}

impl BlockingJudge {
    pub fn new(response: RawJudgeResponse) -> (Self, Arc<Notify>) {
        let release = Arc::new(Notify::new());
        (
            Self {
                release: Arc::clone(&release),
                response,
            },
            release,
        )
    }
}

#[async_trait]
impl NarrativeJudge for BlockingJudge {
    async fn judge(
        &self,
        _character: &Character,
        _history: &[FeedMessage],
        _action: &str,
        _world: &WorldState,
    ) -> anyhow::Result<RawJudgeResponse> {
        self.release.notified().await;
        Ok(self.response.clone())
    }
}

/// Renders every prompt to a fixed data URI.
pub struct StaticAssets;

#[async_trait]
impl AssetSynthesizer for StaticAssets {
    async fn render_scene(&self, _prompt: &str) -> Option<ImageRef> {
        Some(ImageRef("data:image/png;base64,cena".into()))
    }

    async fn render_portrait(&self, _name: &str, _appearance: &str) -> Option<ImageRef> {
        Some(ImageRef("data:image/png;base64,retrato".into()))
    }
}

/// Arbiter that replays a queue of canned duel verdicts.
pub struct ScriptedArbiter {
    verdicts: Mutex<VecDeque<anyhow::Result<RawDuelVerdict>>>,
}

impl ScriptedArbiter {
    pub fn new(verdicts: Vec<anyhow::Result<RawDuelVerdict>>) -> Self {
        Self {
            verdicts: Mutex::new(verdicts.into_iter().collect()),
        }
    }
}

#[async_trait]
impl PvpArbiter for ScriptedArbiter {
    async fn arbitrate(
        &self,
        _player: &Character,
        _opponent: &Character,
        _player_action: &str,
        _opponent_action: &str,
    ) -> anyhow::Result<RawDuelVerdict> {
        self.verdicts
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("arbiter script exhausted")))
    }
}

pub fn narrative_response(text: &str) -> RawJudgeResponse {
    RawJudgeResponse {
        narrative: text.into(),
        ..RawJudgeResponse::default()
    }
}

pub fn hit_response(text: &str, qi_cost: i64, xp_gain: i64, hp_change: i64) -> RawJudgeResponse {
    RawJudgeResponse {
        narrative: text.into(),
        action_evaluation: Some(RawActionEvaluation {
            status: "ACERTO".into(),
            qi_cost: Some(qi_cost),
            ..RawActionEvaluation::default()
        }),
        xp_gain: Some(xp_gain),
        hp_change: Some(hp_change),
        ..RawJudgeResponse::default()
    }
}
