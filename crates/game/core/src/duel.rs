//! PvP duel state machine.
//!
//! A duel advances Lobby → Matched → InProgress → Resolved and never moves
//! backwards. Only the local player's state is mutated by verdicts; the
//! opponent is a snapshot used for arbitration context. Once a winner is
//! declared the machine is sealed and every further turn is rejected.

use serde::{Deserialize, Serialize};

use crate::error::DuelError;
use crate::progression::{StatDeltas, apply_delta};
use crate::state::{Character, FeedMessage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelPhase {
    Lobby,
    Matched,
    InProgress,
    Resolved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelWinner {
    Player,
    Opponent,
}

/// One arbitrated duel exchange, already sanitized.
///
/// `p1_damage` and `p1_qi_cost` are what the exchange costs the local player;
/// the opponent's side is narrative only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelVerdict {
    pub narrative: String,
    #[serde(default)]
    pub kokusen: bool,
    #[serde(default)]
    pub p1_damage: u32,
    #[serde(default)]
    pub p1_qi_cost: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<DuelWinner>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DuelState {
    pub room: String,
    pub phase: DuelPhase,
    pub opponent: Option<Character>,
    pub winner: Option<DuelWinner>,
    pub history: Vec<FeedMessage>,
}

impl DuelState {
    /// Opens a duel lobby for the given room.
    pub fn join(room: impl Into<String>) -> Result<Self, DuelError> {
        let room = room.into();
        if room.trim().is_empty() {
            return Err(DuelError::EmptyRoom);
        }
        Ok(Self {
            room,
            phase: DuelPhase::Lobby,
            opponent: None,
            winner: None,
            history: Vec::new(),
        })
    }

    /// Stores the matched combatant. Valid only while in the lobby.
    pub fn matched(&mut self, opponent: Character) -> Result<(), DuelError> {
        if self.phase != DuelPhase::Lobby {
            return Err(DuelError::WrongPhase(self.phase));
        }
        self.opponent = Some(opponent);
        self.phase = DuelPhase::Matched;
        Ok(())
    }

    /// Starts the exchange loop, emitting the opening narrator entry.
    pub fn begin(&mut self) -> Result<&FeedMessage, DuelError> {
        if self.phase != DuelPhase::Matched {
            return Err(DuelError::WrongPhase(self.phase));
        }
        self.phase = DuelPhase::InProgress;
        self.history.push(FeedMessage::narration(format!(
            "O Duelo de Expansão começou na sala {}! Manifestem sua vontade.",
            self.room
        )));
        Ok(self.history.last().expect("just pushed"))
    }

    /// Applies one arbitrated exchange to the player.
    ///
    /// Damage and qi cost go through the clamping delta path, so lethal
    /// verdicts floor at zero instead of underflowing. A verdict carrying a
    /// winner seals the duel in the same step.
    pub fn apply_verdict(
        &mut self,
        player: &Character,
        verdict: &DuelVerdict,
    ) -> Result<Character, DuelError> {
        match self.phase {
            DuelPhase::InProgress => {}
            DuelPhase::Resolved => return Err(DuelError::AlreadyResolved),
            phase => return Err(DuelError::WrongPhase(phase)),
        }

        let (next, _) = apply_delta(
            player,
            StatDeltas {
                hp: -clamp_to_i32(verdict.p1_damage),
                qi: -clamp_to_i32(verdict.p1_qi_cost),
                ..StatDeltas::none()
            },
        );

        self.history
            .push(FeedMessage::narration(verdict.narrative.clone()));

        if let Some(winner) = verdict.winner {
            self.winner = Some(winner);
            self.phase = DuelPhase::Resolved;
        }

        Ok(next)
    }

    pub fn is_resolved(&self) -> bool {
        self.phase == DuelPhase::Resolved
    }
}

fn clamp_to_i32(value: u32) -> i32 {
    value.min(i32::MAX as u32) as i32
}
