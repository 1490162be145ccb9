//! Shared world timeline state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Session-scoped world state threaded through every judge call.
///
/// The per-location and per-NPC memory maps are opaque to the engine: they
/// are handed to the narrative judge verbatim and never interpreted here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub current_arc: String,
    pub current_location: String,
    #[serde(default)]
    pub notable_deaths: Vec<String>,
    /// Unbounded in both directions.
    pub player_reputation: i32,
    pub global_tension: i32,
    /// Unix timestamp in milliseconds of the last committed turn.
    pub last_update_timestamp: i64,
    /// Gates the recurring world boss; cleared by the scheduler at each
    /// local day boundary.
    pub daily_boss_beaten: bool,
    #[serde(default)]
    pub locations: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub npc_memories: BTreeMap<String, serde_json::Value>,
}

impl Default for WorldState {
    fn default() -> Self {
        Self {
            current_arc: String::new(),
            current_location: String::new(),
            notable_deaths: Vec::new(),
            player_reputation: 0,
            global_tension: 0,
            last_update_timestamp: 0,
            daily_boss_beaten: false,
            locations: BTreeMap::new(),
            npc_memories: BTreeMap::new(),
        }
    }
}
