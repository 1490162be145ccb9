//! Weighted-rarity technique draws.
//!
//! The gacha is a two-stage draw: a uniform percentage roll in [0, 100)
//! selects the rarity band, then a uniform pick selects an entry from that
//! tier's catalog. Each successful draw costs exactly one spin and
//! destructively replaces the character's technique.

use serde::{Deserialize, Serialize};

use crate::env::{RngOracle, compute_seed};
use crate::error::GachaError;
use crate::state::{Character, Rarity, Technique};

/// Seed context for the rarity band roll.
const SEED_TIER_ROLL: u32 = 0;
/// Seed context for the in-tier pick.
const SEED_TIER_PICK: u32 = 1;

impl Rarity {
    /// Maps a uniform roll in [0, 100) onto its rarity band.
    ///
    /// Bands are inclusive-exclusive: Comum [0,60), Raro [60,85),
    /// Épico [85,95), Lendário [95,99), Grau Especial [99,100). Every roll
    /// lands in exactly one band; out-of-domain rolls saturate at the ends.
    pub fn from_roll(roll: f64) -> Rarity {
        if roll < 60.0 {
            Rarity::Comum
        } else if roll < 85.0 {
            Rarity::Raro
        } else if roll < 95.0 {
            Rarity::Epico
        } else if roll < 99.0 {
            Rarity::Lendario
        } else {
            Rarity::GrauEspecial
        }
    }
}

/// One technique the gacha can yield.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechniqueEntry {
    pub name: String,
    pub description: String,
}

/// Fixed per-tier technique catalog.
///
/// The reference content carries five entries per tier, but any non-empty
/// tier is accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechniqueCatalog {
    pub comum: Vec<TechniqueEntry>,
    pub raro: Vec<TechniqueEntry>,
    pub epico: Vec<TechniqueEntry>,
    pub lendario: Vec<TechniqueEntry>,
    pub grau_especial: Vec<TechniqueEntry>,
}

impl TechniqueCatalog {
    pub fn tier(&self, rarity: Rarity) -> &[TechniqueEntry] {
        match rarity {
            Rarity::Comum => &self.comum,
            Rarity::Raro => &self.raro,
            Rarity::Epico => &self.epico,
            Rarity::Lendario => &self.lendario,
            Rarity::GrauEspecial => &self.grau_especial,
        }
    }

    /// Verifies every tier has at least one entry.
    pub fn validate(&self) -> Result<(), GachaError> {
        use strum::IntoEnumIterator;
        for rarity in Rarity::iter() {
            if self.tier(rarity).is_empty() {
                return Err(GachaError::EmptyTier(rarity));
            }
        }
        Ok(())
    }
}

/// Outcome of a successful draw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GachaDraw {
    pub technique: TechniqueEntry,
    pub rarity: Rarity,
    pub roll: f64,
    pub spins_left: u32,
}

/// Draws a technique for the character.
///
/// Precondition: `spins >= 1`; a draw attempted at zero spins fails with
/// [`GachaError::NoSpins`] and changes nothing. On success the draw costs
/// exactly one spin and the new technique permanently overwrites the
/// previous one — no history of past techniques is retained.
pub fn spin(
    character: &Character,
    catalog: &TechniqueCatalog,
    rng: &dyn RngOracle,
    game_seed: u64,
    nonce: u64,
) -> Result<(Character, GachaDraw), GachaError> {
    if character.spins == 0 {
        return Err(GachaError::NoSpins);
    }

    let roll = rng.roll_percent(compute_seed(game_seed, nonce, SEED_TIER_ROLL));
    let rarity = Rarity::from_roll(roll);

    let entries = catalog.tier(rarity);
    if entries.is_empty() {
        return Err(GachaError::EmptyTier(rarity));
    }
    let pick = rng.range(
        compute_seed(game_seed, nonce, SEED_TIER_PICK),
        0,
        (entries.len() - 1) as u32,
    ) as usize;
    let technique = entries[pick].clone();

    let mut next = character.clone();
    next.spins -= 1;
    next.technique = Technique {
        name: technique.name.clone(),
        description: technique.description.clone(),
    };

    let spins_left = next.spins;
    Ok((
        next,
        GachaDraw {
            technique,
            rarity,
            roll,
            spins_left,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::PcgRng;
    use crate::state::{CoreStats, Equipment, Grade, Origin};

    fn catalog() -> TechniqueCatalog {
        let tier = |prefix: &str| {
            (0..5)
                .map(|i| TechniqueEntry {
                    name: format!("{prefix} {i}"),
                    description: String::new(),
                })
                .collect()
        };
        TechniqueCatalog {
            comum: tier("Comum"),
            raro: tier("Raro"),
            epico: tier("Épico"),
            lendario: tier("Lendário"),
            grau_especial: tier("Especial"),
        }
    }

    fn character_with_spins(spins: u32) -> Character {
        Character {
            name: "Teste".into(),
            origin: Origin::Humano,
            appearance: String::new(),
            grade: Grade::WEAKEST,
            technique: Technique {
                name: "Anterior".into(),
                description: "Técnica antiga.".into(),
            },
            level: 1,
            xp: 0,
            next_level_xp: GameConfig::BASE_NEXT_LEVEL_XP,
            spins,
            has_rct: false,
            profile_image: None,
            stats: CoreStats {
                forca: 10,
                energia: 10,
                qi: 10,
                sorte: 5,
            },
            current_hp: 200,
            current_qi: 150,
            current_stamina: 100,
            inventory: Vec::new(),
            equipment: Equipment::empty(),
            abilities: Vec::new(),
            status_effects: Vec::new(),
        }
    }

    // Reference values pinning the band boundaries.
    #[test]
    fn roll_bands_are_inclusive_exclusive() {
        assert_eq!(Rarity::from_roll(10.0), Rarity::Comum);
        assert_eq!(Rarity::from_roll(59.99), Rarity::Comum);
        assert_eq!(Rarity::from_roll(60.0), Rarity::Raro);
        assert_eq!(Rarity::from_roll(70.0), Rarity::Raro);
        assert_eq!(Rarity::from_roll(85.0), Rarity::Epico);
        assert_eq!(Rarity::from_roll(90.0), Rarity::Epico);
        assert_eq!(Rarity::from_roll(95.0), Rarity::Lendario);
        assert_eq!(Rarity::from_roll(96.0), Rarity::Lendario);
        assert_eq!(Rarity::from_roll(99.0), Rarity::GrauEspecial);
        assert_eq!(Rarity::from_roll(99.5), Rarity::GrauEspecial);
    }

    #[test]
    fn successful_draw_costs_one_spin_and_overwrites_technique() {
        let character = character_with_spins(1);
        let (next, draw) = spin(&character, &catalog(), &PcgRng, 1234, 0).expect("draw");

        assert_eq!(next.spins, 0);
        assert_eq!(draw.spins_left, 0);
        assert_eq!(next.technique.name, draw.technique.name);
        assert_ne!(next.technique.name, "Anterior");
        // Drawn entry belongs to the reported tier.
        assert!(
            catalog()
                .tier(draw.rarity)
                .iter()
                .any(|e| e.name == draw.technique.name)
        );
    }

    #[test]
    fn draw_at_zero_spins_is_rejected_without_change() {
        let character = character_with_spins(0);
        let err = spin(&character, &catalog(), &PcgRng, 1234, 0).unwrap_err();
        assert_eq!(err, GachaError::NoSpins);
        // Caller still holds the untouched value.
        assert_eq!(character.spins, 0);
        assert_eq!(character.technique.name, "Anterior");
    }

    #[test]
    fn empty_tier_is_a_precondition_failure() {
        let mut catalog = catalog();
        catalog.comum.clear();
        assert_eq!(catalog.validate(), Err(GachaError::EmptyTier(Rarity::Comum)));

        // Find a seed whose roll lands in the Comum band, then draw.
        let rng = PcgRng;
        let nonce = (0..200u64)
            .find(|n| Rarity::from_roll(rng.roll_percent(compute_seed(7, *n, SEED_TIER_ROLL))) == Rarity::Comum)
            .expect("some roll lands in the widest band");
        let character = character_with_spins(3);
        let err = spin(&character, &catalog, &rng, 7, nonce).unwrap_err();
        assert_eq!(err, GachaError::EmptyTier(Rarity::Comum));
    }

    #[test]
    fn draws_are_reproducible_for_a_seed() {
        let character = character_with_spins(5);
        let a = spin(&character, &catalog(), &PcgRng, 99, 3).expect("draw");
        let b = spin(&character, &catalog(), &PcgRng, 99, 3).expect("draw");
        assert_eq!(a.1, b.1);
    }
}
