//! Sanitized judge verdicts.
//!
//! The narrative judge is an external generative collaborator; its output is
//! advisory data, not trusted code. The types here are the *validated* form:
//! the runtime parses the wire payload into raw DTOs, checks enum membership
//! and numeric ranges, and only then constructs these values. Unsigned fields
//! make negative costs unrepresentable after sanitization.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::state::{EnemyState, SourceRef};

/// The judge's classification of a declared action.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum EvaluationStatus {
    /// The action landed.
    #[serde(rename = "ACERTO")]
    #[strum(serialize = "ACERTO")]
    Acerto,
    /// The action failed.
    #[serde(rename = "ERRO")]
    #[strum(serialize = "ERRO")]
    Erro,
    /// The action is implausible for the character's grade.
    #[serde(rename = "IMPOSSÍVEL")]
    #[strum(serialize = "IMPOSSÍVEL")]
    Impossivel,
    /// An exceptional hit.
    #[serde(rename = "CRÍTICO")]
    #[strum(serialize = "CRÍTICO")]
    Critico,
}

impl EvaluationStatus {
    /// Whether this status resolves the action in the player's favor.
    pub fn is_hit(&self) -> bool {
        matches!(self, EvaluationStatus::Acerto)
    }
}

/// Structured evaluation of a single action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionEvaluation {
    pub status: EvaluationStatus,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub damage_dealt: u32,
    #[serde(default)]
    pub qi_cost: u32,
    #[serde(default)]
    pub stamina_cost: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_effect: Option<String>,
    #[serde(default)]
    pub hp_recovered: u32,
    /// Full replacement for the active adversary, never a merge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enemy_update: Option<EnemyState>,
}

/// A complete, sanitized verdict for one turn.
///
/// `hp_change` and `xp_gain` are the net narrative effect, distinct from the
/// per-evaluation costs; both are honored during resolution. `hp_change` may
/// be negative (damage taken) or positive (narrative healing).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JudgeVerdict {
    pub narrative: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<ActionEvaluation>,
    #[serde(default)]
    pub kokusen: bool,
    #[serde(default)]
    pub xp_gain: i32,
    #[serde(default)]
    pub hp_change: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceRef>,
}

impl JudgeVerdict {
    /// A verdict carrying only narration: no evaluation, no state effect.
    pub fn narrative_only(text: impl Into<String>) -> Self {
        Self {
            narrative: text.into(),
            image_prompt: None,
            evaluation: None,
            kokusen: false,
            xp_gain: 0,
            hp_change: 0,
            sources: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_wire_labels_only() {
        assert_eq!("ACERTO".parse::<EvaluationStatus>().ok(), Some(EvaluationStatus::Acerto));
        assert_eq!(
            "IMPOSSÍVEL".parse::<EvaluationStatus>().ok(),
            Some(EvaluationStatus::Impossivel)
        );
        assert_eq!(
            "CRÍTICO".parse::<EvaluationStatus>().ok(),
            Some(EvaluationStatus::Critico)
        );
        assert!("acerto".parse::<EvaluationStatus>().is_err());
        assert!("WIN".parse::<EvaluationStatus>().is_err());
    }

    #[test]
    fn narrative_only_has_no_mechanical_payload() {
        let verdict = JudgeVerdict::narrative_only("A chuva cai sobre Shibuya.");
        assert!(verdict.evaluation.is_none());
        assert_eq!(verdict.hp_change, 0);
        assert_eq!(verdict.xp_gain, 0);
    }
}
