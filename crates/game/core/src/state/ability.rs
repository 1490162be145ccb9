//! Learned abilities, distinct from the single gacha technique.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Whether an ability is actively invoked or always on.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum AbilityKind {
    #[serde(rename = "Ativa")]
    #[strum(serialize = "Ativa")]
    Ativa,
    #[serde(rename = "Passiva")]
    #[strum(serialize = "Passiva")]
    Passiva,
}

/// A learned ability with resource costs and a level gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub description: String,
    pub qi_cost: u32,
    pub stamina_cost: u32,
    pub kind: AbilityKind,
    pub effect: String,
    pub required_level: u32,
    #[serde(default)]
    pub is_ultimate: bool,
}

impl Ability {
    /// Whether a character of the given level may use this ability.
    pub fn unlocked_at(&self, level: u32) -> bool {
        level >= self.required_level
    }
}
