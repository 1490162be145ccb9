use serde::{Deserialize, Serialize};

/// Game balance constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of recent feed messages handed to the narrative judge as
    /// context for the next turn.
    pub history_window: usize,
}

impl GameConfig {
    // ===== derived resource maxima =====
    /// Max HP per point of forca.
    pub const HP_PER_FORCA: u32 = 20;
    /// Max qi per point of energia.
    pub const QI_PER_ENERGIA: u32 = 15;
    /// Stamina pool has no stat-derived formula; it is a flat cap.
    pub const BASE_MAX_STAMINA: u32 = 100;

    // ===== progression =====
    /// XP threshold for the first level-up.
    pub const BASE_NEXT_LEVEL_XP: u32 = 500;
    /// Points added to forca and to energia on each level-up.
    pub const LEVEL_UP_STAT_GAIN: u32 = 2;
    /// Threshold growth is floor(previous * 3 / 2).
    pub const XP_CURVE_NUM: u64 = 3;
    pub const XP_CURVE_DEN: u64 = 2;

    // ===== gacha =====
    /// Spins granted to a freshly created character.
    pub const STARTING_SPINS: u32 = 5;

    // ===== world boss reward =====
    /// Bonus spin range granted for beating the recurring boss, inclusive.
    pub const BOSS_REWARD_SPINS_MIN: u32 = 2;
    pub const BOSS_REWARD_SPINS_MAX: u32 = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HISTORY_WINDOW: usize = 5;

    pub fn new() -> Self {
        Self {
            history_window: Self::DEFAULT_HISTORY_WINDOW,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
