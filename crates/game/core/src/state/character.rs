//! The player character.

use serde::{Deserialize, Serialize};

use super::ability::Ability;
use super::grade::{Grade, Origin};
use super::item::{Equipment, Item, Slot};
use super::message::ImageRef;
use crate::config::GameConfig;

/// Core stats. Maxima for HP and qi are derived from these on every read
/// and never stored, so they can never go stale after a level-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreStats {
    pub forca: u32,
    pub energia: u32,
    pub qi: u32,
    pub sorte: u32,
}

impl CoreStats {
    pub fn max_hp(&self) -> u32 {
        self.forca * GameConfig::HP_PER_FORCA
    }

    pub fn max_qi(&self) -> u32 {
        self.energia * GameConfig::QI_PER_ENERGIA
    }
}

/// The single currently-equipped special technique.
///
/// Acquiring a new one via gacha permanently overwrites the previous one;
/// no history is retained.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technique {
    pub name: String,
    pub description: String,
}

/// Canonical player character state.
///
/// Created once at character creation, persisted across save/reload, and
/// mutated exclusively by turn resolution and the gacha engine — always by
/// value (callers receive a new character, never an in-place edit).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub origin: Origin,
    pub appearance: String,
    pub grade: Grade,
    pub technique: Technique,
    pub level: u32,
    pub xp: u32,
    pub next_level_xp: u32,
    /// Gacha currency. Decremented by exactly 1 per draw, never negative.
    pub spins: u32,
    #[serde(default)]
    pub has_rct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<ImageRef>,
    pub stats: CoreStats,
    pub current_hp: u32,
    pub current_qi: u32,
    pub current_stamina: u32,
    #[serde(default)]
    pub inventory: Vec<Item>,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub status_effects: Vec<String>,
}

impl Character {
    pub fn max_hp(&self) -> u32 {
        self.stats.max_hp()
    }

    pub fn max_qi(&self) -> u32 {
        self.stats.max_qi()
    }

    pub fn max_stamina(&self) -> u32 {
        GameConfig::BASE_MAX_STAMINA
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }

    /// Abilities usable at the character's current level.
    pub fn abilities_unlocked(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter().filter(|a| a.unlocked_at(self.level))
    }

    /// Equips an inventory item by id into its slot. The displaced item, if
    /// any, returns to the inventory; the equipped item leaves it.
    pub fn equip_from_inventory(&mut self, item_id: &str) -> bool {
        let Some(index) = self.inventory.iter().position(|i| i.id == item_id) else {
            return false;
        };
        let item = self.inventory.remove(index);
        if let Some(displaced) = self.equipment.equip(item) {
            self.inventory.push(displaced);
        }
        true
    }

    /// Unequips a slot back into the inventory.
    pub fn unequip_to_inventory(&mut self, slot: Slot) -> bool {
        match self.equipment.unequip(slot) {
            Some(item) => {
                self.inventory.push(item);
                true
            }
            None => false,
        }
    }

    /// Adds a status condition tag; presence-only, duplicates collapse.
    pub fn add_status(&mut self, tag: &str) {
        if !self.has_status(tag) {
            self.status_effects.push(tag.to_string());
        }
    }

    pub fn remove_status(&mut self, tag: &str) {
        self.status_effects.retain(|t| t != tag);
    }

    pub fn has_status(&self, tag: &str) -> bool {
        self.status_effects.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::item::{Rarity, StatBonus};

    fn test_character() -> Character {
        Character {
            name: "Teste".into(),
            origin: Origin::Humano,
            appearance: String::new(),
            grade: Grade::WEAKEST,
            technique: Technique::default(),
            level: 1,
            xp: 0,
            next_level_xp: GameConfig::BASE_NEXT_LEVEL_XP,
            spins: GameConfig::STARTING_SPINS,
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

    #[test]
    fn maxima_are_derived_from_stats() {
        let mut character = test_character();
        assert_eq!(character.max_hp(), 200);
        assert_eq!(character.max_qi(), 150);
        character.stats.forca += 2;
        character.stats.energia += 2;
        assert_eq!(character.max_hp(), 240);
        assert_eq!(character.max_qi(), 180);
    }

    #[test]
    fn equip_from_inventory_swaps_through_slot() {
        let mut character = test_character();
        for id in ["espada", "lamina"] {
            character.inventory.push(Item {
                id: id.into(),
                name: id.into(),
                description: String::new(),
                rarity: Rarity::Comum,
                slot: Slot::Arma,
                bonus: StatBonus::default(),
                icon_url: None,
            });
        }

        assert!(character.equip_from_inventory("espada"));
        assert_eq!(character.inventory.len(), 1);

        // Equipping the second weapon sends the first back to the bag.
        assert!(character.equip_from_inventory("lamina"));
        assert_eq!(character.inventory.len(), 1);
        assert_eq!(character.inventory[0].id, "espada");
        assert!(!character.equip_from_inventory("inexistente"));
    }

    #[test]
    fn status_tags_are_presence_only() {
        let mut character = test_character();
        character.add_status("Envenenado");
        character.add_status("Envenenado");
        assert_eq!(character.status_effects.len(), 1);
        character.remove_status("Envenenado");
        assert!(!character.has_status("Envenenado"));
    }
}
