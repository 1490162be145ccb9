//! Recurring world event scheduler.
//!
//! Polls the session on a fixed interval and injects the daily boss turn
//! when the configured local hour arrives. Decision logic is split into pure
//! functions over `(now, world)` so tests drive it without a clock; the loop
//! itself only shuttles state between the session handle and those checks.

use std::time::Duration;

use chrono::{DateTime, FixedOffset, TimeZone, Timelike, Utc};
use tracing::{info, warn};

use game_core::WorldState;

use crate::api::errors::RuntimeError;
use crate::session::SessionHandle;

/// Action line submitted when the daily boss spawns.
pub const BOSS_EVENT_ACTION: &str = "EVENTO: O Boss Diário de Grau Especial surgiu!";

const BRT_OFFSET_SECONDS: i32 = -3 * 3600;

#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// How often the trigger condition is evaluated.
    pub check_interval: Duration,
    /// Local hour (0-23) at which the boss spawns.
    pub trigger_hour: u32,
    /// Local timezone used for the hour and day-boundary checks.
    pub utc_offset: FixedOffset,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            check_interval: Duration::from_secs(60),
            trigger_hour: 8,
            utc_offset: FixedOffset::east_opt(BRT_OFFSET_SECONDS)
                .expect("static UTC-3 offset is in range"),
        }
    }
}

/// True when the local date has advanced past the date of the last
/// committed turn, meaning the daily boss gate must be re-armed.
pub fn day_rolled_over(now_local: DateTime<FixedOffset>, world: &WorldState) -> bool {
    if !world.daily_boss_beaten {
        return false;
    }
    match Utc.timestamp_millis_opt(world.last_update_timestamp).single() {
        Some(last) => {
            last.with_timezone(&now_local.timezone()).date_naive() < now_local.date_naive()
        }
        None => false,
    }
}

/// True when the boss turn should be injected right now.
///
/// Requires the trigger hour, an unbeaten boss, and no encounter already in
/// progress; the last guard keeps the event from stacking onto its own
/// unresolved fight within the window.
pub fn should_trigger(
    now_local: DateTime<FixedOffset>,
    world: &WorldState,
    enemy_active: bool,
    trigger_hour: u32,
) -> bool {
    now_local.hour() == trigger_hour && !world.daily_boss_beaten && !enemy_active
}

/// Drives the daily boss against a session.
pub struct WorldEventScheduler {
    handle: SessionHandle,
    config: SchedulerConfig,
}

impl WorldEventScheduler {
    pub fn new(handle: SessionHandle, config: SchedulerConfig) -> Self {
        Self { handle, config }
    }

    /// Runs until the session worker goes away.
    pub async fn run(self) {
        let mut interval = tokio::time::interval(self.config.check_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if let Err(RuntimeError::CommandChannelClosed) = self.check_once().await {
                info!("session closed, stopping world event scheduler");
                return;
            }
        }
    }

    /// One scheduler tick: re-arm on day rollover, then fire if due.
    pub async fn check_once(&self) -> Result<(), RuntimeError> {
        let state = self.handle.snapshot().await?;
        let now_local = Utc::now().with_timezone(&self.config.utc_offset);

        if day_rolled_over(now_local, &state.world) {
            info!("local day rolled over, re-arming daily boss");
            self.handle.reset_daily_boss().await?;
        }

        let enemy_active = state.enemy.is_some();
        if should_trigger(now_local, &state.world, enemy_active, self.config.trigger_hour) {
            match self.handle.trigger_world_event(BOSS_EVENT_ACTION).await {
                Ok(report) => {
                    info!(committed = report.committed, "daily boss turn resolved");
                }
                // A player turn already holds the slot; next tick retries.
                Err(RuntimeError::TurnInFlight) => {}
                Err(err) => {
                    warn!(%err, "daily boss turn failed");
                }
            }
        }

        Ok(())
    }
}
