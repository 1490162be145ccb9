//! The active adversary, as reported by the narrative judge.

use serde::{Deserialize, Serialize};

use super::grade::Grade;
use super::meter::ResourceMeter;

/// Session-scoped adversary state.
///
/// Created when a judgement introduces an adversary, replaced wholesale by
/// each subsequent judgement that updates it, and cleared when a judgement
/// reports the encounter resolved. Fields never merge across updates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyState {
    pub name: String,
    pub grade: Grade,
    pub hp: ResourceMeter,
    pub qi: ResourceMeter,
    pub stamina: ResourceMeter,
    #[serde(default)]
    pub status_effects: Vec<String>,
}

impl EnemyState {
    pub fn is_defeated(&self) -> bool {
        self.hp.is_empty()
    }
}
