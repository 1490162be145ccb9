//! Power grades and character origin.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One of eight totally ordered power tiers, weakest to strongest.
///
/// The ordering governs narrative plausibility of outcomes: the judge is
/// expected to treat a Grau 4 facing a Grau 1 as near-certain death. The
/// engine itself only relies on the `Ord` impl.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Grade {
    #[serde(rename = "Grau 4")]
    #[strum(serialize = "Grau 4")]
    Grau4,
    #[serde(rename = "Semi-Grau 3")]
    #[strum(serialize = "Semi-Grau 3")]
    SemiGrau3,
    #[serde(rename = "Grau 3")]
    #[strum(serialize = "Grau 3")]
    Grau3,
    #[serde(rename = "Semi-Grau 2")]
    #[strum(serialize = "Semi-Grau 2")]
    SemiGrau2,
    #[serde(rename = "Grau 2")]
    #[strum(serialize = "Grau 2")]
    Grau2,
    #[serde(rename = "Semi-Grau 1")]
    #[strum(serialize = "Semi-Grau 1")]
    SemiGrau1,
    #[serde(rename = "Grau 1")]
    #[strum(serialize = "Grau 1")]
    Grau1,
    #[serde(rename = "Grau Especial")]
    #[strum(serialize = "Grau Especial")]
    GrauEspecial,
}

impl Grade {
    /// The weakest grade; new characters start here.
    pub const WEAKEST: Grade = Grade::Grau4;
}

/// Whether the character awakened as a sorcerer or manifested as a curse.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Origin {
    #[serde(rename = "Humano")]
    #[strum(serialize = "Humano")]
    Humano,
    #[serde(rename = "Maldição")]
    #[strum(serialize = "Maldição")]
    Maldicao,
}
