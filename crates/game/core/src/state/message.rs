//! Narrative feed messages.

use serde::{Deserialize, Serialize};

use crate::judgement::ActionEvaluation;

/// Opaque reference to a rendered image asset.
///
/// The engine never inspects the contents; it may be a URL, a data URI, or a
/// storage key, depending on the asset synthesizer behind the port.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

/// Citation attached by the judge to ground a narration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub title: String,
    pub uri: String,
}

/// One entry in the narrative feed, tagged by speaker role.
///
/// Player and opponent entries carry only their declared action; everything
/// mechanical rides on the narrator entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum FeedMessage {
    Player { content: String },
    Opponent { content: String },
    Narrator(NarratorMessage),
}

/// Narrator payload: narrative text plus pass-through presentation data.
///
/// `kokusen` marks the "critical flash" combat highlight; it has no
/// mechanical effect beyond display emphasis. `evaluation` and `sources`
/// are retained verbatim for presentation layers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NarratorMessage {
    pub narrative: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub kokusen: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<ActionEvaluation>,
    #[serde(default)]
    pub xp_gain: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceRef>,
}

impl FeedMessage {
    pub fn player(content: impl Into<String>) -> Self {
        FeedMessage::Player {
            content: content.into(),
        }
    }

    pub fn opponent(content: impl Into<String>) -> Self {
        FeedMessage::Opponent {
            content: content.into(),
        }
    }

    /// Narrator entry carrying only text, used for fallback narration.
    pub fn narration(text: impl Into<String>) -> Self {
        FeedMessage::Narrator(NarratorMessage {
            narrative: text.into(),
            ..NarratorMessage::default()
        })
    }

    pub fn is_narrator(&self) -> bool {
        matches!(self, FeedMessage::Narrator(_))
    }
}
