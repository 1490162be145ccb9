//! Character state model: delta application and leveling.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::state::{Character, clamped};

/// Signed deltas applied to a character in one resolution step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDeltas {
    pub hp: i32,
    pub qi: i32,
    pub stamina: i32,
    pub xp: i32,
}

impl StatDeltas {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Emitted when delta application crosses the XP threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub new_level: u32,
    pub next_level_xp: u32,
}

/// Applies resource and XP deltas, returning a new character value.
///
/// Maxima for HP and qi are recomputed from the current stats; currents are
/// clamped into `[0, max]` after the deltas land. Out-of-range deltas are
/// absorbed by clamping, never rejected, and nothing here is an error.
///
/// XP at or above `next_level_xp` triggers exactly one level-up per call:
/// the remainder is carried forward (not discarded), the threshold grows to
/// `floor(threshold * 3/2)`, and forca and energia each gain two points. If
/// the carried remainder already crosses the new threshold, the extra
/// level-up waits for the next call.
pub fn apply_delta(character: &Character, deltas: StatDeltas) -> (Character, Option<LevelUp>) {
    let mut next = character.clone();

    // Clamp against the pre-level-up maxima; a level-up this turn raises the
    // caps but does not retroactively refill the pools.
    next.current_hp = clamped(next.current_hp, i64::from(deltas.hp), next.max_hp());
    next.current_qi = clamped(next.current_qi, i64::from(deltas.qi), next.max_qi());
    next.current_stamina = clamped(
        next.current_stamina,
        i64::from(deltas.stamina),
        next.max_stamina(),
    );

    next.xp = (i64::from(next.xp) + i64::from(deltas.xp)).max(0) as u32;

    let level_up = if next.xp >= next.next_level_xp {
        next.level += 1;
        next.xp -= next.next_level_xp;
        next.next_level_xp = ((u64::from(next.next_level_xp) * GameConfig::XP_CURVE_NUM)
            / GameConfig::XP_CURVE_DEN) as u32;
        next.stats.forca += GameConfig::LEVEL_UP_STAT_GAIN;
        next.stats.energia += GameConfig::LEVEL_UP_STAT_GAIN;
        Some(LevelUp {
            new_level: next.level,
            next_level_xp: next.next_level_xp,
        })
    } else {
        None
    };

    (next, level_up)
}
