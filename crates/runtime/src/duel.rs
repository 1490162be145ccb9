//! PvP duel coordination.
//!
//! Drives game-core's duel state machine against the session: opponents come
//! from an [`OpponentSource`], their action lines from an [`OpponentPolicy`],
//! and each exchange is settled by the [`PvpArbiter`]. Player damage lands
//! through the session's commit path while the coordinator holds the shared
//! turn slot, so duel exchanges and story turns can never interleave.

use std::sync::Arc;

use tracing::{info, warn};

use game_core::{DuelState, DuelWinner, FeedMessage};

use crate::api::errors::{Result, RuntimeError};
use crate::api::ports::{OpponentPolicy, OpponentSource, PvpArbiter, sanitize_duel_verdict};
use crate::events::{DuelEvent, Event};
use crate::session::SessionHandle;

pub struct DuelCoordinator {
    session: SessionHandle,
    arbiter: Arc<dyn PvpArbiter>,
    policy: Arc<dyn OpponentPolicy>,
    duel: DuelState,
}

impl DuelCoordinator {
    /// Joins a duel room: finds an opponent, opens the duel, and publishes
    /// the opening narration.
    pub async fn join(
        session: SessionHandle,
        opponents: Arc<dyn OpponentSource>,
        arbiter: Arc<dyn PvpArbiter>,
        policy: Arc<dyn OpponentPolicy>,
        room: impl Into<String>,
    ) -> Result<Self> {
        let mut duel = DuelState::join(room)?;

        let player = session.snapshot().await?.character;
        let opponent = opponents
            .find_opponent(&duel.room, &player)
            .await
            .map_err(|err| RuntimeError::OpponentUnavailable {
                room: duel.room.clone(),
                reason: err.to_string(),
            })?;
        let opponent_name = opponent.name.clone();

        duel.matched(opponent)?;
        let opening = duel.begin()?.clone();

        info!(room = %duel.room, opponent = %opponent_name, "duel started");
        session.bus().publish(Event::Duel(DuelEvent::Started {
            room: duel.room.clone(),
            opponent: opponent_name,
        }));
        session.bus().publish(Event::Duel(DuelEvent::TurnResolved {
            room: duel.room.clone(),
            message: opening,
        }));

        Ok(Self {
            session,
            arbiter,
            policy,
            duel,
        })
    }

    /// Resolves one duel exchange.
    ///
    /// Arbitration failure discards the turn: nothing is recorded and the
    /// player's state is untouched. A winner tag seals the duel; any later
    /// submission fails with [`game_core::DuelError::AlreadyResolved`].
    pub async fn submit_turn(&mut self, action: impl Into<String>) -> Result<FeedMessage> {
        let action = action.into();
        if action.trim().is_empty() {
            return Err(RuntimeError::EmptyAction);
        }
        if self.duel.is_resolved() {
            return Err(game_core::DuelError::AlreadyResolved.into());
        }

        let _slot = self.session.acquire_turn_slot()?;

        let player = self.session.snapshot().await?.character;
        let opponent = self
            .duel
            .opponent
            .as_ref()
            .ok_or(RuntimeError::Duel(game_core::DuelError::WrongPhase(
                self.duel.phase,
            )))?
            .clone();
        let opponent_action = self.policy.next_action();

        let raw = match self
            .arbiter
            .arbitrate(&player, &opponent, &action, &opponent_action)
            .await
        {
            Ok(raw) => raw,
            Err(err) => {
                warn!(room = %self.duel.room, %err, "duel arbitration failed");
                self.session
                    .bus()
                    .publish(Event::Duel(DuelEvent::ArbitrationFailed {
                        room: self.duel.room.clone(),
                    }));
                return Err(RuntimeError::ArbitrationFailed(err.to_string()));
            }
        };
        let verdict = sanitize_duel_verdict(raw)?;

        self.duel.history.push(FeedMessage::player(action));
        self.duel
            .history
            .push(FeedMessage::opponent(opponent_action));
        let next_player = self.duel.apply_verdict(&player, &verdict)?;
        self.session.commit_character(next_player).await?;

        let message = self
            .duel
            .history
            .last()
            .cloned()
            .unwrap_or_else(|| FeedMessage::narration(verdict.narrative.clone()));
        self.session
            .bus()
            .publish(Event::Duel(DuelEvent::TurnResolved {
                room: self.duel.room.clone(),
                message: message.clone(),
            }));

        if let Some(winner) = self.duel.winner {
            info!(room = %self.duel.room, ?winner, "duel resolved");
            self.session.bus().publish(Event::Duel(DuelEvent::Resolved {
                room: self.duel.room.clone(),
                winner,
            }));
        }

        Ok(message)
    }

    pub fn state(&self) -> &DuelState {
        &self.duel
    }

    pub fn winner(&self) -> Option<DuelWinner> {
        self.duel.winner
    }
}
