//! The session worker: single logical writer of [`SessionState`].
//!
//! Commands arrive over an mpsc channel and are processed one at a time, so
//! every read-modify-write of the session is serialized here. The turn
//! pipeline reads state once, suspends on the judge, resolves purely, and
//! commits the result in a single assignment.

use tokio::sync::{mpsc, oneshot};
use tracing::{error, info, warn};

use game_core::{
    Character, FeedMessage, GachaDraw, GameConfig, LevelUp, PcgRng, SessionState, TechniqueCatalog,
    TurnKind, gacha, resolve_turn,
};

use crate::api::errors::Result;
use crate::api::ports::{AssetSynthesizer, NarrativeJudge, sanitize_judge_response};
use crate::events::{Event, EventBus, FeedEvent, SystemEvent};
use crate::repository::SnapshotRepository;

/// Narration shown when the judge is unreachable or returns garbage.
pub const FALLBACK_NARRATIVE: &str = "Erro no fluxo de energia.";

/// Commands accepted by the session worker.
pub(crate) enum Command {
    ResolveTurn {
        turn: TurnKind,
        reply: oneshot::Sender<Result<TurnReport>>,
    },
    Spin {
        reply: oneshot::Sender<Result<GachaDraw>>,
    },
    Snapshot {
        reply: oneshot::Sender<SessionState>,
    },
    ResetDailyBoss {
        reply: oneshot::Sender<()>,
    },
    CommitCharacter {
        character: Character,
        reply: oneshot::Sender<()>,
    },
}

/// What one resolved turn produced.
#[derive(Debug, Clone)]
pub struct TurnReport {
    pub message: FeedMessage,
    pub level_up: Option<LevelUp>,
    pub boss_reward: Option<u32>,
    pub defeated: bool,
    /// False when the judge failed and the fallback narration was shown
    /// without committing anything.
    pub committed: bool,
}

pub(crate) struct SessionWorker {
    session_id: String,
    state: SessionState,
    config: GameConfig,
    catalog: TechniqueCatalog,
    judge: Box<dyn NarrativeJudge>,
    assets: Option<Box<dyn AssetSynthesizer>>,
    repository: Box<dyn SnapshotRepository>,
    bus: EventBus,
    rng: PcgRng,
    command_rx: mpsc::Receiver<Command>,
}

impl SessionWorker {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        session_id: String,
        state: SessionState,
        config: GameConfig,
        catalog: TechniqueCatalog,
        judge: Box<dyn NarrativeJudge>,
        assets: Option<Box<dyn AssetSynthesizer>>,
        repository: Box<dyn SnapshotRepository>,
        bus: EventBus,
        command_rx: mpsc::Receiver<Command>,
    ) -> Self {
        Self {
            session_id,
            state,
            config,
            catalog,
            judge,
            assets,
            repository,
            bus,
            rng: PcgRng,
            command_rx,
        }
    }

    /// Main worker loop. Exits when every handle is dropped.
    pub(crate) async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }
        info!(session = %self.session_id, "session worker stopped");
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::ResolveTurn { turn, reply } => {
                let result = self.resolve(turn).await;
                let _ = reply.send(result);
            }
            Command::Spin { reply } => {
                let result = self.spin();
                let _ = reply.send(result);
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(self.state.clone());
            }
            Command::ResetDailyBoss { reply } => {
                self.reset_daily_boss();
                let _ = reply.send(());
            }
            Command::CommitCharacter { character, reply } => {
                self.state.character = character;
                self.persist();
                let _ = reply.send(());
            }
        }
    }

    /// The turn pipeline: judge, sanitize, resolve, illustrate, commit.
    async fn resolve(&mut self, turn: TurnKind) -> Result<TurnReport> {
        if matches!(turn, TurnKind::WorldEvent { .. }) {
            self.bus
                .publish(Event::System(SystemEvent::BossEventTriggered));
        }

        let raw = self
            .judge
            .judge(
                &self.state.character,
                self.state.recent_history(self.config.history_window),
                turn.action_text(),
                &self.state.world,
            )
            .await;

        let verdict = match raw {
            Ok(raw) => match sanitize_judge_response(raw) {
                Ok(verdict) => verdict,
                Err(err) => {
                    warn!(session = %self.session_id, %err, "judge verdict rejected");
                    return Ok(self.fallback_report());
                }
            },
            Err(err) => {
                warn!(session = %self.session_id, %err, "judge call failed");
                return Ok(self.fallback_report());
            }
        };

        let mut outcome = resolve_turn(&self.state, &turn, &verdict, &self.rng);

        // Best-effort illustration; an absent image never blocks the commit.
        if let (Some(assets), Some(prompt)) =
            (self.assets.as_deref(), verdict.image_prompt.as_deref())
            && let Some(image) = assets.render_scene(prompt).await
        {
            outcome.attach_image(image);
        }

        let level_up = outcome.level_up;
        let boss_reward = outcome.boss_reward;
        let defeated = outcome.defeated;

        let (mut next, message) = outcome.finalize();
        next.world.last_update_timestamp = chrono::Utc::now().timestamp_millis();
        self.state = next;
        self.persist();

        self.bus.publish(Event::Feed(FeedEvent::MessageAppended {
            message: message.clone(),
        }));
        if let Some(level_up) = level_up {
            self.bus.publish(Event::System(SystemEvent::LevelUp {
                new_level: level_up.new_level,
            }));
        }
        if let Some(spins) = boss_reward {
            self.bus
                .publish(Event::System(SystemEvent::BossRewardGranted { spins }));
        }
        if defeated {
            self.bus.publish(Event::System(SystemEvent::Defeated));
        }

        Ok(TurnReport {
            message,
            level_up,
            boss_reward,
            defeated,
            committed: true,
        })
    }

    fn fallback_report(&self) -> TurnReport {
        let message = FeedMessage::narration(FALLBACK_NARRATIVE);
        self.bus.publish(Event::Feed(FeedEvent::FallbackNarration {
            message: message.clone(),
        }));
        TurnReport {
            message,
            level_up: None,
            boss_reward: None,
            defeated: false,
            committed: false,
        }
    }

    fn spin(&mut self) -> Result<GachaDraw> {
        let (character, draw) = gacha::spin(
            &self.state.character,
            &self.catalog,
            &self.rng,
            self.state.game_seed,
            self.state.nonce,
        )?;

        self.state.character = character;
        self.state.nonce += 1;
        self.persist();

        self.bus
            .publish(Event::System(SystemEvent::TechniqueAwakened {
                name: draw.technique.name.clone(),
                rarity: draw.rarity,
            }));

        Ok(draw)
    }

    fn reset_daily_boss(&mut self) {
        if self.state.world.daily_boss_beaten {
            self.state.world.daily_boss_beaten = false;
            self.persist();
        }
        self.bus.publish(Event::System(SystemEvent::DailyReset));
    }

    /// Snapshot persistence is best-effort after the in-memory commit; a
    /// failed save is retried implicitly on the next committed turn.
    fn persist(&self) {
        if let Err(err) = self.repository.save(&self.session_id, &self.state) {
            error!(session = %self.session_id, %err, "snapshot save failed");
        }
    }
}
