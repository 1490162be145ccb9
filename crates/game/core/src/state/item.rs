//! Items, rarity tiers, and the three-slot equipment mapping.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Rarity tier of techniques and items, weakest to strongest.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Rarity {
    #[serde(rename = "Comum")]
    #[strum(serialize = "Comum")]
    Comum,
    #[serde(rename = "Raro")]
    #[strum(serialize = "Raro")]
    Raro,
    #[serde(rename = "Épico")]
    #[strum(serialize = "Épico")]
    Epico,
    #[serde(rename = "Lendário")]
    #[strum(serialize = "Lendário")]
    Lendario,
    #[serde(rename = "Grau Especial")]
    #[strum(serialize = "Grau Especial")]
    GrauEspecial,
}

/// Equipment slot an item occupies.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Slot {
    #[serde(rename = "Arma")]
    #[strum(serialize = "Arma")]
    Arma,
    #[serde(rename = "Vestimenta")]
    #[strum(serialize = "Vestimenta")]
    Vestimenta,
    #[serde(rename = "Amuleto")]
    #[strum(serialize = "Amuleto")]
    Amuleto,
}

/// Additive stat bonuses carried by an item. Missing fields default to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonus {
    #[serde(default)]
    pub forca: i32,
    #[serde(default)]
    pub energia: i32,
    #[serde(default)]
    pub qi: i32,
    #[serde(default)]
    pub sorte: i32,
}

/// An inventory item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub slot: Slot,
    #[serde(default)]
    pub bonus: StatBonus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// The fixed three-slot equipment mapping.
///
/// Each slot holds at most one item; equipping into an occupied slot
/// displaces the previous occupant back to the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arma: Option<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vestimenta: Option<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amuleto: Option<Item>,
}

impl Equipment {
    /// Creates empty equipment (all slots vacant).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the item equipped in a slot, if any.
    pub fn get(&self, slot: Slot) -> Option<&Item> {
        self.slot_ref(slot).as_ref()
    }

    /// Equips an item into the slot its kind dictates, returning the
    /// displaced item if the slot was occupied.
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        self.slot_mut(item.slot).replace(item)
    }

    /// Vacates a slot, returning the item that occupied it.
    pub fn unequip(&mut self, slot: Slot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    /// Sum of stat bonuses across all equipped items.
    pub fn total_bonus(&self) -> StatBonus {
        let mut total = StatBonus::default();
        for item in [&self.arma, &self.vestimenta, &self.amuleto]
            .into_iter()
            .flatten()
        {
            total.forca += item.bonus.forca;
            total.energia += item.bonus.energia;
            total.qi += item.bonus.qi;
            total.sorte += item.bonus.sorte;
        }
        total
    }

    fn slot_ref(&self, slot: Slot) -> &Option<Item> {
        match slot {
            Slot::Arma => &self.arma,
            Slot::Vestimenta => &self.vestimenta,
            Slot::Amuleto => &self.amuleto,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<Item> {
        match slot {
            Slot::Arma => &mut self.arma,
            Slot::Vestimenta => &mut self.vestimenta,
            Slot::Amuleto => &mut self.amuleto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, slot: Slot) -> Item {
        Item {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            rarity: Rarity::Comum,
            slot,
            bonus: StatBonus::default(),
            icon_url: None,
        }
    }

    #[test]
    fn equip_displaces_previous_occupant() {
        let mut equipment = Equipment::empty();
        assert!(equipment.equip(item("katana", Slot::Arma)).is_none());
        let displaced = equipment.equip(item("lanca", Slot::Arma));
        assert_eq!(displaced.map(|i| i.id), Some("katana".to_string()));
        assert_eq!(equipment.get(Slot::Arma).map(|i| i.id.as_str()), Some("lanca"));
        assert!(equipment.get(Slot::Vestimenta).is_none());
    }

    #[test]
    fn total_bonus_sums_equipped_items() {
        let mut equipment = Equipment::empty();
        let mut arma = item("katana", Slot::Arma);
        arma.bonus.forca = 3;
        let mut amuleto = item("contas", Slot::Amuleto);
        amuleto.bonus.forca = 1;
        amuleto.bonus.sorte = 2;
        equipment.equip(arma);
        equipment.equip(amuleto);

        let total = equipment.total_bonus();
        assert_eq!(total.forca, 4);
        assert_eq!(total.sorte, 2);
        assert_eq!(total.energia, 0);
    }
}
