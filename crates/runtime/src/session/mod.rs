//! Session orchestration.
//!
//! [`Session`] owns the worker task; [`SessionHandle`] is the cloneable
//! façade clients talk to. All state mutation funnels through the worker's
//! command channel, and turn-shaped work additionally passes a one-permit
//! gate so at most one turn is ever in flight.

mod worker;

pub use worker::{FALLBACK_NARRATIVE, TurnReport};

use std::sync::Arc;

use tokio::sync::{Semaphore, broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;

use game_core::{
    Character, GachaDraw, GameConfig, SessionState, TechniqueCatalog, TurnKind,
};
use game_content::builtin_catalog;

use crate::api::errors::{Result, RuntimeError};
use crate::api::ports::{AssetSynthesizer, NarrativeJudge};
use crate::events::{Event, EventBus, Topic};
use crate::repository::{InMemorySnapshotRepository, SnapshotRepository};
use worker::{Command, SessionWorker};

/// Channel and bus sizing for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub game_config: GameConfig,
    pub command_buffer_size: usize,
    pub event_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            command_buffer_size: 32,
            event_capacity: 100,
        }
    }
}

/// A running game session.
///
/// Owns the worker task; dropping every handle (including this one) stops
/// the worker.
pub struct Session {
    handle: SessionHandle,
    worker_handle: JoinHandle<()>,
}

impl Session {
    pub fn builder(session_id: impl Into<String>) -> SessionBuilder {
        SessionBuilder::new(session_id)
    }

    /// Get a cloneable handle to this session.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Shutdown gracefully, waiting for the worker to drain.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Client-facing handle to interact with a session.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    bus: EventBus,
    turn_gate: Arc<Semaphore>,
}

impl SessionHandle {
    /// Submits a player action for resolution.
    ///
    /// Rejects blank actions outright, and fails fast with
    /// [`RuntimeError::TurnInFlight`] when another turn is already being
    /// resolved — submissions are never queued behind each other.
    pub async fn submit_action(&self, action: impl Into<String>) -> Result<TurnReport> {
        let action = action.into();
        if action.trim().is_empty() {
            return Err(RuntimeError::EmptyAction);
        }
        let _permit = self.acquire_turn_slot()?;
        self.resolve_turn(TurnKind::Player { action }).await
    }

    /// Submits a system-originated world event through the same turn slot.
    pub async fn trigger_world_event(&self, label: impl Into<String>) -> Result<TurnReport> {
        let _permit = self.acquire_turn_slot()?;
        self.resolve_turn(TurnKind::WorldEvent {
            label: label.into(),
        })
        .await
    }

    /// Draws a technique from the gacha. Shares the turn slot, so a draw
    /// cannot interleave with a resolving turn.
    pub async fn spin(&self) -> Result<GachaDraw> {
        let _permit = self.acquire_turn_slot()?;
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Spin { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Reads a consistent copy of the current session state.
    pub async fn snapshot(&self) -> Result<SessionState> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Snapshot { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Re-arms the daily boss after a local day rollover.
    pub async fn reset_daily_boss(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::ResetDailyBoss { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to a bus topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Claims the single turn slot, used by duel turns as well.
    pub(crate) fn acquire_turn_slot(&self) -> Result<tokio::sync::OwnedSemaphorePermit> {
        Arc::clone(&self.turn_gate)
            .try_acquire_owned()
            .map_err(|_| RuntimeError::TurnInFlight)
    }

    /// Commits an externally computed character, bypassing the gate; callers
    /// must already hold the turn slot.
    pub(crate) async fn commit_character(&self, character: Character) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::CommitCharacter {
            character,
            reply: reply_tx,
        })
        .await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    async fn resolve_turn(&self, turn: TurnKind) -> Result<TurnReport> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::ResolveTurn {
            turn,
            reply: reply_tx,
        })
        .await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    async fn send(&self, cmd: Command) -> Result<()> {
        self.command_tx
            .send(cmd)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}

/// Builder for [`Session`] with flexible configuration.
pub struct SessionBuilder {
    session_id: String,
    config: SessionConfig,
    state: Option<SessionState>,
    catalog: Option<TechniqueCatalog>,
    judge: Option<Box<dyn NarrativeJudge>>,
    assets: Option<Box<dyn AssetSynthesizer>>,
    repository: Option<Box<dyn SnapshotRepository>>,
}

impl SessionBuilder {
    fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            config: SessionConfig::default(),
            state: None,
            catalog: None,
            judge: None,
            assets: None,
            repository: None,
        }
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide the initial session state. When omitted, the builder resumes
    /// from the repository snapshot for this session id.
    pub fn initial_state(mut self, state: SessionState) -> Self {
        self.state = Some(state);
        self
    }

    /// Override the built-in technique catalog.
    pub fn catalog(mut self, catalog: TechniqueCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the required narrative judge.
    pub fn judge(mut self, judge: impl NarrativeJudge + 'static) -> Self {
        self.judge = Some(Box::new(judge));
        self
    }

    /// Set the optional asset synthesizer.
    pub fn assets(mut self, assets: impl AssetSynthesizer + 'static) -> Self {
        self.assets = Some(Box::new(assets));
        self
    }

    /// Set the snapshot repository (defaults to in-memory).
    pub fn repository(mut self, repository: impl SnapshotRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    /// Build the session and spawn its worker.
    pub fn build(self) -> Result<Session> {
        let judge = self.judge.ok_or(RuntimeError::MissingJudge)?;
        let repository = self
            .repository
            .unwrap_or_else(|| Box::new(InMemorySnapshotRepository::new()));

        let state = match self.state {
            Some(state) => state,
            None => repository
                .load(&self.session_id)?
                .ok_or(RuntimeError::MissingState)?,
        };

        let catalog = self.catalog.unwrap_or_else(builtin_catalog);

        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size);
        let bus = EventBus::with_capacity(self.config.event_capacity);

        let worker = SessionWorker::new(
            self.session_id,
            state,
            self.config.game_config,
            catalog,
            judge,
            self.assets,
            repository,
            bus.clone(),
            command_rx,
        );

        let worker_handle = tokio::spawn(worker.run());

        Ok(Session {
            handle: SessionHandle {
                command_tx,
                bus,
                turn_gate: Arc::new(Semaphore::new(1)),
            },
            worker_handle,
        })
    }
}
